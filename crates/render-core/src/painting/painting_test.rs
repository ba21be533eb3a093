#![cfg(test)]

use super::*;
use crate::{DrawOp, PaintMode, RecordingCanvas};
use carta_layout::{TextBlock, text_width};
use carta_style::{FontFace, TextAlign, TextStyle};
use carta_types::{Color, Rect};

fn canvas() -> RecordingCanvas {
    RecordingCanvas::new(210.0, 297.0)
}

fn style() -> TextStyle {
    TextStyle::new(FontFace::Helvetica, 9.0, Color::BLACK)
}

fn path_count(canvas: &RecordingCanvas) -> usize {
    canvas
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Path { .. }))
        .count()
}

#[test]
fn test_pill_reports_consumed_width() {
    let mut c = canvas();
    let label_style = style().with_color(Color::WHITE);
    let used = pill(&mut c, 20.0, 50.0, "Vegan", &label_style, Color::rgb(21, 128, 61));

    assert!((used - (pill_width("Vegan", &label_style) + PILL_GAP)).abs() < 1e-4);
    assert_eq!(path_count(&c), 1);
    let text = c.find_text("Vegan").unwrap();
    assert!(text.x > 20.0);
    assert!(text.y > 50.0 && text.y < 50.0 + pill_height(&label_style));
}

#[test]
fn test_chained_pills_do_not_overlap() {
    let mut c = canvas();
    let s = style();
    let first = pill(&mut c, 10.0, 10.0, "Special", &s, Color::BLACK);
    pill(&mut c, 10.0 + first, 10.0, "Popular", &s, Color::BLACK);

    let special = c.find_text("Special").unwrap();
    let popular = c.find_text("Popular").unwrap();
    assert!(popular.x > special.x + text_width("Special", &s));
}

#[test]
fn test_leader_dots_skip_short_gaps() {
    let mut c = canvas();
    assert_eq!(leader_dots(&mut c, 100.0, 100.0 + MIN_LEADER_GAP - 0.1, 40.0, Color::BLACK), 0);
    assert!(c.ops().is_empty());

    let dots = leader_dots(&mut c, 50.0, 150.0, 40.0, Color::BLACK);
    assert!(dots > 50);
    assert_eq!(path_count(&c), 1);
}

#[test]
fn test_numbered_circle_shrinks_long_numbers() {
    let mut c = canvas();
    numbered_circle(&mut c, 20.0, 20.0, "7", Color::BLACK, Color::WHITE);
    numbered_circle(&mut c, 20.0, 30.0, "128", Color::BLACK, Color::WHITE);

    let short = c.find_text("7").unwrap();
    let long = c.find_text("128").unwrap();
    assert!(long.style.size < short.style.size);
    assert!(text_width("128", &long.style) < 2.0 * NUMBER_RADIUS);
}

#[test]
fn test_right_aligned_text_ends_at_anchor() {
    let mut c = canvas();
    let s = style();
    let width = draw_aligned(&mut c, "12,90 €", 195.0, 40.0, TextAlign::Right, &s);
    let op = c.find_text("12,90 €").unwrap();
    assert!((op.x + width - 195.0).abs() < 1e-4);
}

#[test]
fn test_draw_block_returns_reserved_height() {
    let mut c = canvas();
    let block = TextBlock::wrap(
        "Hand-cut pasta with a slow-cooked ragù of beef shin and pork shoulder",
        40.0,
        style(),
    );
    let used = draw_block(&mut c, &block, 10.0, 100.0, TextAlign::Left);

    assert_eq!(used, block.height());
    let ys: Vec<f32> = c.texts().map(|t| t.y).collect();
    assert_eq!(ys.len(), block.lines.len());
    assert!(ys.windows(2).all(|w| w[1] > w[0]));
    assert!(*ys.last().unwrap() < 100.0 + used);
}

#[test]
fn test_ornate_frame_has_more_detail_than_plain() {
    let area = Rect::new(10.0, 10.0, 85.0, 128.0);
    let mut plain = canvas();
    frame(&mut plain, area, FrameStyle::Plain, Color::BLACK);
    let mut ornate = canvas();
    frame(&mut ornate, area, FrameStyle::Ornate, Color::BLACK);

    assert_eq!(path_count(&plain), 1);
    assert!(path_count(&ornate) > path_count(&plain));
}

#[test]
fn test_spice_row_width() {
    let mut c = canvas();
    let width = spice_row(&mut c, 10.0, 10.0, 3, 2.0, Color::rgb(239, 68, 68));
    assert!((width - 3.0 * 2.6).abs() < 1e-4);
    let fills = c
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Path { mode: PaintMode::Fill, .. }))
        .count();
    assert_eq!(fills, 3);
}

#[test]
fn test_card_with_shadow_paints_shadow_first() {
    let mut c = canvas();
    card(&mut c, Rect::new(10.0, 10.0, 80.0, 60.0), 2.0, Color::WHITE, Color::gray(200), true);

    match &c.ops()[..] {
        [DrawOp::Path { mode: PaintMode::Fill, .. }, DrawOp::Path { mode: PaintMode::FillStroke, fill, .. }] => {
            assert_eq!(*fill, Color::WHITE);
        }
        other => panic!("unexpected ops: {other:?}"),
    }
}

#[test]
fn test_motifs_draw_something() {
    for kind in [Motif::Appetizer, Motif::Main, Motif::Dessert, Motif::Drink] {
        let mut c = canvas();
        motif(&mut c, kind, 50.0, 50.0, 8.0, Color::BLACK);
        assert!(path_count(&c) >= 1, "{kind:?} drew nothing");
    }
}
