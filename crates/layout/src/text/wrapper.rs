use super::measure::{line_height, text_width};
use carta_style::TextStyle;

/// Greedy word wrap of `text` into lines no wider than `max_width` mm.
///
/// Explicit newlines start a new line. A word wider than the whole line is
/// broken between characters. Empty or whitespace-only text yields no lines.
pub fn wrap_text(text: &str, max_width: f32, style: &TextStyle) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width(&candidate, style) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if text_width(word, style) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, max_width, style);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(current);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn break_word(word: &str, max_width: f32, style: &TextStyle) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        // A single glyph always stays on its line, even if it alone overflows.
        if current.chars().count() > 1 && text_width(&current, style) > max_width {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

pub fn line_count(text: &str, max_width: f32, style: &TextStyle) -> usize {
    wrap_text(text, max_width, style).len()
}

/// Lines of text already broken for a given width, together with the style
/// they will be drawn in. Measuring and drawing both work from the same
/// block so the reserved height always matches what is painted.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub style: TextStyle,
}

impl TextBlock {
    pub fn wrap(text: &str, max_width: f32, style: TextStyle) -> Self {
        Self {
            lines: wrap_text(text, max_width, &style),
            style,
        }
    }

    /// A block of exactly one unwrapped line; empty text yields no lines.
    pub fn single(text: impl Into<String>, style: TextStyle) -> Self {
        let text = text.into();
        let lines = if text.is_empty() { Vec::new() } else { vec![text] };
        Self { lines, style }
    }

    pub fn empty(style: TextStyle) -> Self {
        Self {
            lines: Vec::new(),
            style,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_height(&self) -> f32 {
        line_height(self.style.size)
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height()
    }

    /// Width of the widest line.
    pub fn width(&self) -> f32 {
        self.lines
            .iter()
            .map(|l| text_width(l, &self.style))
            .fold(0.0, f32::max)
    }
}
