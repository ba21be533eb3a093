use crate::fonts::FontMetrics;
use carta_style::{MM_PER_PT, TextStyle};

/// Leading applied on top of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

const ELLIPSIS: char = '…';

/// Vertical advance of one line of text set at `size` points, in mm.
pub fn line_height(size: f32) -> f32 {
    size * MM_PER_PT * LINE_HEIGHT_FACTOR
}

/// Rendered width of `text` in mm.
pub fn text_width(text: &str, style: &TextStyle) -> f32 {
    let metrics = FontMetrics::for_face(style.face);
    let units: u32 = text.chars().map(|c| u32::from(metrics.glyph_width(c))).sum();
    units as f32 / 1000.0 * style.size * MM_PER_PT
}

/// Shortens `text` so it fits in `max_width`, marking the cut with an
/// ellipsis. Text that already fits is returned unchanged.
pub fn truncate_to_width(text: &str, max_width: f32, style: &TextStyle) -> String {
    if text_width(text, style) <= max_width {
        return text.to_string();
    }
    let metrics = FontMetrics::for_face(style.face);
    let scale = style.size * MM_PER_PT / 1000.0;
    let budget = max_width - f32::from(metrics.glyph_width(ELLIPSIS)) * scale;
    if budget <= 0.0 {
        return String::new();
    }

    let mut used = 0.0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = f32::from(metrics.glyph_width(ch)) * scale;
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    let mut out = out.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}
