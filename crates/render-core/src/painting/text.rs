use crate::Canvas;
use carta_layout::{TextBlock, line_height, text_width};
use carta_style::{TextAlign, TextStyle, pt_to_mm};

/// Share of the line height that sits above the baseline.
const BASELINE_RATIO: f32 = 0.8;

/// Baseline of a line whose box starts at `top`.
pub fn baseline(top: f32, style: &TextStyle) -> f32 {
    top + line_height(style.size) * BASELINE_RATIO
}

/// Baseline that visually centers capitals on `center_y`.
pub fn centered_baseline(center_y: f32, style: &TextStyle) -> f32 {
    center_y + pt_to_mm(style.size) * 0.36
}

/// Draws one line anchored at `x`: its left edge, center or right edge
/// depending on `align`. Returns the drawn width.
pub fn draw_aligned<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    x: f32,
    baseline_y: f32,
    align: TextAlign,
    style: &TextStyle,
) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let width = text_width(text, style);
    let left = match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    };
    canvas.text(text, left, baseline_y, style);
    width
}

/// Draws every line of `block` starting at `top`. Returns the height used.
pub fn draw_block<C: Canvas + ?Sized>(
    canvas: &mut C,
    block: &TextBlock,
    x: f32,
    top: f32,
    align: TextAlign,
) -> f32 {
    let lh = block.line_height();
    for (i, line) in block.lines.iter().enumerate() {
        let y = baseline(top + i as f32 * lh, &block.style);
        draw_aligned(canvas, line, x, y, align, &block.style);
    }
    block.height()
}
