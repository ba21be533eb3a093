//! Small pictograms drawn from curves, so no icon assets are needed.

use super::shapes::circle;
use crate::{Canvas, PaintMode, PathBuilder};
use carta_types::Color;

const STEM: Color = Color::rgb(22, 163, 74);
const SPICE_GAP: f32 = 0.6;

/// A filled heart `size` mm wide centered on (`cx`, `cy`).
pub fn heart<C: Canvas + ?Sized>(canvas: &mut C, cx: f32, cy: f32, size: f32, color: Color) {
    let s = size;
    let path = PathBuilder::new()
        .move_to(cx, cy + 0.45 * s)
        .curve_to(
            (cx - 0.55 * s, cy + 0.1 * s),
            (cx - 0.5 * s, cy - 0.45 * s),
            (cx, cy - 0.2 * s),
        )
        .curve_to(
            (cx + 0.5 * s, cy - 0.45 * s),
            (cx + 0.55 * s, cy + 0.1 * s),
            (cx, cy + 0.45 * s),
        )
        .close();
    canvas.set_fill_color(color);
    canvas.path(path.segments(), PaintMode::Fill);
}

/// A chili pepper `size` mm wide whose left edge is at `x`.
pub fn spice<C: Canvas + ?Sized>(canvas: &mut C, x: f32, cy: f32, size: f32, color: Color) {
    let s = size;
    let body = PathBuilder::new()
        .move_to(x + 0.2 * s, cy - 0.3 * s)
        .curve_to(
            (x + 0.9 * s, cy - 0.3 * s),
            (x + s, cy + 0.2 * s),
            (x + 0.55 * s, cy + 0.5 * s),
        )
        .curve_to(
            (x + 0.75 * s, cy + 0.1 * s),
            (x + 0.5 * s, cy - 0.05 * s),
            (x, cy - 0.1 * s),
        )
        .close();
    canvas.set_fill_color(color);
    canvas.path(body.segments(), PaintMode::Fill);

    canvas.set_stroke_color(STEM);
    canvas.set_line_width(0.3);
    let stem = PathBuilder::new()
        .move_to(x + 0.15 * s, cy - 0.25 * s)
        .line_to(x + 0.05 * s, cy - 0.5 * s);
    canvas.path(stem.segments(), PaintMode::Stroke);
}

/// `level` chilis in a row. Returns the width used.
pub fn spice_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: f32,
    cy: f32,
    level: u8,
    size: f32,
    color: Color,
) -> f32 {
    for i in 0..level {
        spice(canvas, x + f32::from(i) * (size + SPICE_GAP), cy, size, color);
    }
    f32::from(level) * (size + SPICE_GAP)
}

/// An outlined clock face with hands at three o'clock.
pub fn clock<C: Canvas + ?Sized>(canvas: &mut C, cx: f32, cy: f32, r: f32, color: Color) {
    canvas.set_stroke_color(color);
    canvas.set_line_width(0.25);
    circle(canvas, cx, cy, r, PaintMode::Stroke);
    let hands = PathBuilder::new()
        .move_to(cx, cy - 0.6 * r)
        .line_to(cx, cy)
        .line_to(cx + 0.45 * r, cy);
    canvas.path(hands.segments(), PaintMode::Stroke);
}
