//! Decorative strokes for the elegant layouts.

use super::shapes::{circle, diamond};
use crate::{Canvas, PaintMode, PathBuilder};
use carta_types::Color;

const STROKE: f32 = 0.3;

/// A thin rule `width` mm long centered on `cx`, broken in the middle by a
/// diamond and capped with dots.
pub fn ornament_line<C: Canvas + ?Sized>(canvas: &mut C, cx: f32, y: f32, width: f32, color: Color) {
    let half = width / 2.0;
    let inner = 2.5_f32.min(half);
    canvas.set_stroke_color(color);
    canvas.set_fill_color(color);
    canvas.set_line_width(STROKE);

    let rules = PathBuilder::new()
        .move_to(cx - half, y)
        .line_to(cx - inner, y)
        .move_to(cx + inner, y)
        .line_to(cx + half, y);
    canvas.path(rules.segments(), PaintMode::Stroke);
    diamond(canvas, cx, y, 2.0);
    circle(canvas, cx - half, y, 0.4, PaintMode::Fill);
    circle(canvas, cx + half, y, 0.4, PaintMode::Fill);
}

/// The course a motif illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motif {
    /// A leaf.
    Appetizer,
    /// Plate between fork and knife.
    Main,
    /// Cake wedge with a cherry.
    Dessert,
    /// Stemmed glass.
    Drink,
}

/// Draws `kind` in a `size` mm square centered on (`cx`, `cy`).
pub fn motif<C: Canvas + ?Sized>(canvas: &mut C, kind: Motif, cx: f32, cy: f32, size: f32, color: Color) {
    let h = size / 2.0;
    canvas.set_stroke_color(color);
    canvas.set_fill_color(color);
    canvas.set_line_width(STROKE);

    match kind {
        Motif::Appetizer => {
            let leaf = PathBuilder::new()
                .move_to(cx - h, cy + h * 0.6)
                .curve_to((cx - h * 0.6, cy - h), (cx + h * 0.4, cy - h), (cx + h, cy - h * 0.6))
                .curve_to((cx + h * 0.6, cy + h), (cx - h * 0.4, cy + h), (cx - h, cy + h * 0.6))
                .close()
                .move_to(cx - h, cy + h * 0.6)
                .line_to(cx + h * 0.4, cy - h * 0.2);
            canvas.path(leaf.segments(), PaintMode::Stroke);
        }
        Motif::Main => {
            circle(canvas, cx, cy, h * 0.6, PaintMode::Stroke);
            circle(canvas, cx, cy, h * 0.4, PaintMode::Stroke);
            let cutlery = PathBuilder::new()
                .move_to(cx - h * 0.85, cy - h * 0.6)
                .line_to(cx - h * 0.85, cy + h * 0.6)
                .move_to(cx + h * 0.85, cy - h * 0.6)
                .line_to(cx + h * 0.85, cy + h * 0.6);
            canvas.path(cutlery.segments(), PaintMode::Stroke);
        }
        Motif::Dessert => {
            let wedge = PathBuilder::new()
                .move_to(cx - h * 0.7, cy + h * 0.6)
                .line_to(cx + h * 0.7, cy + h * 0.6)
                .line_to(cx + h * 0.5, cy - h * 0.2)
                .close();
            canvas.path(wedge.segments(), PaintMode::Stroke);
            circle(canvas, cx + h * 0.4, cy - h * 0.5, h * 0.2, PaintMode::Fill);
        }
        Motif::Drink => {
            let glass = PathBuilder::new()
                .move_to(cx - h * 0.5, cy - h)
                .curve_to((cx - h * 0.5, cy - h * 0.1), (cx + h * 0.5, cy - h * 0.1), (cx + h * 0.5, cy - h))
                .move_to(cx, cy - h * 0.3)
                .line_to(cx, cy + h * 0.8)
                .move_to(cx - h * 0.35, cy + h * 0.8)
                .line_to(cx + h * 0.35, cy + h * 0.8);
            canvas.path(glass.segments(), PaintMode::Stroke);
        }
    }
}
