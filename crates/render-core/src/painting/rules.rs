use crate::{Canvas, PaintMode, PathBuilder};
use carta_types::Color;

/// Below this gap no leader dots are drawn.
pub const MIN_LEADER_GAP: f32 = 4.0;
const LEADER_SPACING: f32 = 1.4;
const LEADER_PADDING: f32 = 1.0;
const DOT_RADIUS: f32 = 0.18;

/// Draws evenly spaced dots between `x_start` and `x_end` just above
/// `baseline_y`. Dots are aligned from the right so the columns of
/// consecutive rows line up. Returns the number of dots drawn.
pub fn leader_dots<C: Canvas + ?Sized>(
    canvas: &mut C,
    x_start: f32,
    x_end: f32,
    baseline_y: f32,
    color: Color,
) -> usize {
    let gap = x_end - x_start;
    if gap < MIN_LEADER_GAP {
        return 0;
    }
    let span = gap - 2.0 * LEADER_PADDING;
    let count = (span / LEADER_SPACING).floor() as usize + 1;
    let y = baseline_y - 0.4;
    let last = x_end - LEADER_PADDING;

    let mut path = PathBuilder::new();
    for i in 0..count {
        path = path.circle(last - i as f32 * LEADER_SPACING, y, DOT_RADIUS);
    }
    canvas.set_fill_color(color);
    canvas.path(path.segments(), PaintMode::Fill);
    count
}

pub fn solid_separator<C: Canvas + ?Sized>(
    canvas: &mut C,
    x1: f32,
    x2: f32,
    y: f32,
    width: f32,
    color: Color,
) {
    canvas.set_stroke_color(color);
    canvas.set_line_width(width);
    let path = PathBuilder::new().move_to(x1, y).line_to(x2, y);
    canvas.path(path.segments(), PaintMode::Stroke);
}

pub fn dotted_separator<C: Canvas + ?Sized>(canvas: &mut C, x1: f32, x2: f32, y: f32, color: Color) {
    canvas.set_line_dash(&[0.6, 1.2]);
    solid_separator(canvas, x1, x2, y, 0.3, color);
    canvas.set_line_dash(&[]);
}
