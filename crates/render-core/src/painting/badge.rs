use super::shapes::rounded_rect;
use super::text::centered_baseline;
use crate::{Canvas, PaintMode};
use carta_layout::text_width;
use carta_style::{TextStyle, pt_to_mm};
use carta_types::{Color, Rect};

const PADDING_X: f32 = 1.6;
const PADDING_Y: f32 = 0.8;
/// Space left after a pill so badges can be chained.
pub const PILL_GAP: f32 = 1.5;

pub fn pill_height(style: &TextStyle) -> f32 {
    pt_to_mm(style.size) + 2.0 * PADDING_Y
}

pub fn pill_width(label: &str, style: &TextStyle) -> f32 {
    text_width(label, style) + 2.0 * PADDING_X
}

/// Draws a filled pill with `label` centered in it, its top-left corner at
/// (`x`, `top`). Returns the horizontal space consumed, trailing gap
/// included.
pub fn pill<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: f32,
    top: f32,
    label: &str,
    style: &TextStyle,
    fill: Color,
) -> f32 {
    let width = pill_width(label, style);
    let height = pill_height(style);
    canvas.set_fill_color(fill);
    rounded_rect(
        canvas,
        Rect::new(x, top, width, height),
        height / 2.0,
        PaintMode::Fill,
    );
    canvas.text(
        label,
        x + PADDING_X,
        centered_baseline(top + height / 2.0, style),
        style,
    );
    width + PILL_GAP
}
