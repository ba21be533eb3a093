//! Two-column grid of fixed-size cards, each with an image area on top.

use super::{Frame, legend_entries};
use carta_layout::{BlockEstimate, TextBlock, line_height, truncate_to_width};
use carta_render_core::{Canvas, PaintMode};
use carta_render_core::painting::{
    accent_bar, baseline, card, centered_baseline, heart, image_placeholder, pill, pill_height, rounded_rect,
    solid_separator,
};
use carta_style::{FontFace, Palette, TextAlign, TextStyle};
use carta_types::{Color, MenuItem, Rect};

pub(crate) const MARGIN: f32 = 12.0;

pub(crate) const CARD_HEIGHT: f32 = 62.0;
const GRID_GAP: f32 = 6.0;
const IMAGE_HEIGHT: f32 = 30.0;
const CARD_RADIUS: f32 = 2.5;
const CARD_PADDING: f32 = 4.0;
const HEADER_QR: f32 = 24.0;
const CATEGORY_SIZE: f32 = 14.0;
const NAME_SIZE: f32 = 11.0;
const DESCRIPTION_SIZE: f32 = 8.5;
const PRICE_SIZE: f32 = 12.0;
const SMALL_SIZE: f32 = 7.0;

pub(crate) fn column_width(content_width: f32) -> f32 {
    (content_width - GRID_GAP) / 2.0
}

fn category_header_height() -> f32 {
    line_height(CATEGORY_SIZE) + 4.0
}

pub(crate) fn render_menu<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    draw_header(f);

    if f.sections.is_empty() {
        let style = TextStyle::new(FontFace::HelveticaOblique, 11.0, f.palette.muted);
        f.empty_notice(style, TextAlign::Left);
        return;
    }

    let width = column_width(f.cursor.content_width);
    let sections = f.sections.clone();
    for section in &sections {
        f.reserve_header(category_header_height(), CARD_HEIGHT);
        let name = f.category_name(section.category);
        draw_category_header(f, name);

        for row in section.items.chunks(2) {
            f.ensure_space(CARD_HEIGHT);
            let top = f.cursor.y;
            for (col, &item) in row.iter().enumerate() {
                let x = f.cursor.left() + col as f32 * (width + GRID_GAP);
                draw_card(f, item, Rect::new(x, top, width, CARD_HEIGHT));
            }
            f.advance(CARD_HEIGHT + GRID_GAP);
        }
        f.advance(2.0);
    }

    draw_allergen_legend(f);
}

fn draw_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let top = f.cursor.y;
    let mut text_width = f.cursor.content_width;
    if f.qr_code().is_some() {
        let area = Rect::new(f.cursor.right() - HEADER_QR, top, HEADER_QR, HEADER_QR);
        f.qr_or_placeholder(area, SMALL_SIZE);
        text_width -= HEADER_QR + 4.0;
    }

    let left = f.cursor.left();
    let name = TextBlock::wrap(
        f.restaurant_name(),
        text_width,
        TextStyle::new(FontFace::HelveticaBold, 22.0, f.palette.primary),
    );
    f.flow_block(&name, left, TextAlign::Left);
    if let Some(address) = f.address() {
        let block = TextBlock::wrap(
            address,
            text_width,
            TextStyle::new(FontFace::Helvetica, 9.5, f.palette.muted),
        );
        f.advance(1.0);
        f.flow_block(&block, left, TextAlign::Left);
    }

    let bottom = f.cursor.y.max(if f.qr_code().is_some() { top + HEADER_QR } else { 0.0 });
    f.cursor.y = bottom + 3.0;
    let right = f.cursor.right();
    solid_separator(f.canvas, left, right, f.cursor.y, 0.6, f.palette.primary);
    f.advance(8.0);
}

fn draw_category_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, name: &str) {
    let style = TextStyle::new(FontFace::HelveticaBold, CATEGORY_SIZE, f.palette.text);
    let block = TextBlock::single(name, style);
    let left = f.cursor.left();
    accent_bar(f.canvas, left, f.cursor.y, block.height(), f.palette.accent);
    f.flow_block(&block, left + 3.0, TextAlign::Left);
    f.advance(4.0);
}

fn draw_card<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, item: &MenuItem, area: Rect) {
    let p = f.palette;
    card(f.canvas, area, CARD_RADIUS, p.background, Palette::RULE, false);

    let image_area = Rect::new(area.x, area.y, area.width, IMAGE_HEIGHT).inset(0.6);
    let drawn = match item.image.as_ref() {
        Some(image) => f.try_image(image, image_area, "item image"),
        None => false,
    };
    if !drawn {
        image_placeholder(f.canvas, image_area, p.primary);
    }

    let labels = f.labels();
    if item.badges.special {
        let style = TextStyle::new(FontFace::HelveticaBold, SMALL_SIZE, Color::WHITE);
        pill(f.canvas, area.x + 2.5, area.y + 2.5, &labels.special, &style, p.accent);
    }
    if item.badges.popular {
        heart(f.canvas, area.right() - 5.0, area.y + 5.0, 3.2, Palette::HOT);
    }

    let inner_x = area.x + CARD_PADDING;
    let inner_width = area.width - 2.0 * CARD_PADDING;
    let mut y = area.y + IMAGE_HEIGHT + 3.0;

    let name_style = TextStyle::new(FontFace::HelveticaBold, NAME_SIZE, p.text);
    let name = truncate_to_width(f.item_name(item), inner_width, &name_style);
    f.text(&name, inner_x, baseline(y, &name_style), TextAlign::Left, &name_style);
    y += line_height(NAME_SIZE) + 0.8;

    if let Some(description) = f.item_description(item) {
        let style = TextStyle::new(FontFace::Helvetica, DESCRIPTION_SIZE, p.muted);
        let first_line = description.lines().next().unwrap_or(description);
        let line = truncate_to_width(first_line, inner_width, &style);
        f.text(&line, inner_x, baseline(y, &style), TextAlign::Left, &style);
    }

    let price_style = TextStyle::new(FontFace::HelveticaBold, PRICE_SIZE, p.price);
    let price_baseline = area.bottom() - CARD_PADDING;
    let price = f.price(item.price);
    let price_width = f.text(&price, area.right() - CARD_PADDING, price_baseline, TextAlign::Right, &price_style);

    let small = TextStyle::new(FontFace::HelveticaBold, SMALL_SIZE, Color::WHITE);
    let pill_top = price_baseline - pill_height(&small);
    let mut x = inner_x;
    for (on, label, fill) in [
        (item.badges.vegetarian, &labels.vegetarian_short, Palette::VEGETARIAN),
        (item.badges.vegan, &labels.vegan_short, Palette::VEGAN),
    ] {
        if on {
            x += pill(f.canvas, x, pill_top, label, &small, fill);
        }
    }

    let codes = f.allergen_codes(item);
    if !codes.is_empty() {
        let style = TextStyle::new(FontFace::Helvetica, SMALL_SIZE, p.muted);
        let room = area.right() - CARD_PADDING - price_width - 2.0 - x;
        let text = truncate_to_width(&codes.join(", "), room, &style);
        f.text(&text, x, price_baseline - 0.6, TextAlign::Left, &style);
    }
}

fn draw_allergen_legend<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let used = f.used_allergens();
    if used.is_empty() {
        return;
    }
    let title = TextBlock::single(
        f.labels().allergens_title.as_str(),
        TextStyle::new(FontFace::HelveticaBold, 9.0, f.palette.text),
    );
    let entries = TextBlock::wrap(
        &legend_entries(&used),
        f.cursor.content_width,
        TextStyle::new(FontFace::Helvetica, SMALL_SIZE, f.palette.muted),
    );
    f.ensure_space(BlockEstimate::new().text(&title).gap(1.0).text(&entries).height());
    let left = f.cursor.left();
    f.flow_block(&title, left, TextAlign::Left);
    f.advance(1.0);
    f.flow_block(&entries, left, TextAlign::Left);
}

pub(crate) fn render_table_tent<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let s = f.scale();
    let area = f.cursor.content_area();
    card(f.canvas, area, CARD_RADIUS * 2.0 * s, f.palette.background, Palette::RULE, true);

    let center = f.cursor.center_x();
    let width = f.cursor.content_width - 8.0 * s;
    let band = Rect::new(area.x, area.y, area.width, 22.0 * s);
    f.canvas.set_fill_color(f.palette.primary);
    rounded_rect(f.canvas, band, CARD_RADIUS * 2.0 * s, PaintMode::Fill);

    let name_style = TextStyle::new(FontFace::HelveticaBold, 16.0 * s, Color::WHITE);
    let name = truncate_to_width(f.restaurant_name(), width, &name_style);
    let name_baseline = centered_baseline(band.center().y, &name_style);
    f.text(&name, center, name_baseline, TextAlign::Center, &name_style);
    f.cursor.y = band.bottom() + 6.0 * s;

    let cta = TextBlock::wrap(
        &f.labels().call_to_action,
        width,
        TextStyle::new(FontFace::Helvetica, 10.0 * s, f.palette.text),
    );
    let table = f.table_number().map(|n| {
        TextBlock::single(
            format!("{} {n}", f.labels().table),
            TextStyle::new(FontFace::HelveticaBold, 14.0 * s, f.palette.primary),
        )
    });
    let below = cta.height() + 4.0 * s + table.as_ref().map_or(0.0, |t| t.height() + 3.0 * s);
    let qr_size = (56.0 * s).min(f.cursor.remaining() - below - 4.0 * s).max(20.0 * s);
    f.ensure_space(qr_size);
    f.qr_or_placeholder(Rect::new(center - qr_size / 2.0, f.cursor.y, qr_size, qr_size), 7.0 * s);
    f.advance(qr_size + 4.0 * s);

    f.ensure_space(below);
    f.flow_block(&cta, center, TextAlign::Center);
    if let Some(table) = table {
        f.advance(3.0 * s);
        f.flow_block(&table, center, TextAlign::Center);
    }

    f.folding_instructions(
        TextStyle::new(FontFace::HelveticaBold, 13.0 * s, f.palette.text),
        TextStyle::new(FontFace::Helvetica, 9.0 * s, f.palette.text),
        f.palette.primary,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Template;
    use crate::config::EngineConfig;
    use crate::templates::test_support::{euros, request};
    use carta_render_core::{DrawOp, RecordingCanvas};
    use carta_types::{Badges, Category};

    fn dishes(count: u64) -> Vec<MenuItem> {
        (1..=count)
            .map(|i| MenuItem::new(i, 1, format!("Bowl {i}"), euros(900)).with_position(i as i32))
            .collect()
    }

    #[test]
    fn test_cards_fill_two_columns() {
        let req = request(vec![Category::new(1, "Bowls", 1)], dishes(3));
        let config = EngineConfig::default();
        let mut canvas = RecordingCanvas::new(210.0, 297.0);
        Template::ModernGrid.render_menu(&mut canvas, &req, &config);

        let x = |name: &str| canvas.find_text(name).unwrap().x;
        let y = |name: &str| canvas.find_text(name).unwrap().y;
        assert!((x("Bowl 1") - x("Bowl 3")).abs() < 1e-3);
        assert!(x("Bowl 2") > x("Bowl 1") + column_width(210.0 - 2.0 * MARGIN));
        assert!((y("Bowl 1") - y("Bowl 2")).abs() < 1e-3);
        assert!((y("Bowl 3") - y("Bowl 1") - (CARD_HEIGHT + GRID_GAP)).abs() < 1e-3);
    }

    #[test]
    fn test_rows_never_cross_the_bottom_margin() {
        let req = request(vec![Category::new(1, "Bowls", 1)], dishes(14));
        let config = EngineConfig::default();
        let mut canvas = RecordingCanvas::new(210.0, 297.0);
        Template::ModernGrid.render_menu(&mut canvas, &req, &config);

        assert!(canvas.page_count() > 1);
        for op in canvas.texts() {
            assert!(op.y <= 297.0 - MARGIN + 0.01, "{} at {}", op.text, op.y);
        }
    }

    #[test]
    fn test_missing_photo_gets_placeholder_and_popular_heart() {
        let item = MenuItem::new(1, 1, "Poke", euros(1250)).with_badges(Badges {
            popular: true,
            special: true,
            ..Badges::default()
        });
        let req = request(vec![Category::new(1, "Bowls", 1)], vec![item]);
        let config = EngineConfig::default();
        let mut canvas = RecordingCanvas::new(210.0, 297.0);
        Template::ModernGrid.render_menu(&mut canvas, &req, &config);

        assert_eq!(canvas.images().count(), 0);
        assert!(canvas.contains_text("Special"));
        let heart_fill = canvas.ops().iter().any(|op| {
            matches!(op, DrawOp::Path { fill, .. } if *fill == Palette::HOT)
        });
        assert!(heart_fill);
    }
}
