use super::text::{centered_baseline, draw_aligned};
use crate::{Canvas, PaintMode, PathBuilder};
use carta_style::{FontFace, TextAlign, TextStyle};
use carta_types::{Color, Rect};

pub const NUMBER_RADIUS: f32 = 2.6;
const ACCENT_BAR_WIDTH: f32 = 1.2;

/// A filled circle of fixed radius with `label` centered in it. Labels
/// longer than two characters are set smaller so they stay inside.
pub fn numbered_circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: f32,
    cy: f32,
    label: &str,
    fill: Color,
    text_color: Color,
) {
    canvas.set_fill_color(fill);
    let path = PathBuilder::new().circle(cx, cy, NUMBER_RADIUS);
    canvas.path(path.segments(), PaintMode::Fill);

    let size = if label.chars().count() > 2 { 5.0 } else { 7.0 };
    let style = TextStyle::new(FontFace::HelveticaBold, size, text_color);
    draw_aligned(
        canvas,
        label,
        cx,
        centered_baseline(cy, &style),
        TextAlign::Center,
        &style,
    );
}

pub fn accent_bar<C: Canvas + ?Sized>(canvas: &mut C, x: f32, top: f32, height: f32, color: Color) {
    canvas.set_fill_color(color);
    let path = PathBuilder::new().rect(Rect::new(x, top, ACCENT_BAR_WIDTH, height));
    canvas.path(path.segments(), PaintMode::Fill);
}

/// A disclosure triangle `size` mm wide, pointing down when `expanded` and
/// right otherwise, vertically centered on `cy`.
pub fn accordion_arrow<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: f32,
    cy: f32,
    size: f32,
    expanded: bool,
    color: Color,
) {
    let half = size / 2.0;
    let path = if expanded {
        PathBuilder::new()
            .move_to(x, cy - half * 0.6)
            .line_to(x + size, cy - half * 0.6)
            .line_to(x + half, cy + half * 0.6)
            .close()
    } else {
        PathBuilder::new()
            .move_to(x, cy - half)
            .line_to(x + size * 0.7, cy)
            .line_to(x, cy + half)
            .close()
    };
    canvas.set_fill_color(color);
    canvas.path(path.segments(), PaintMode::Fill);
}
