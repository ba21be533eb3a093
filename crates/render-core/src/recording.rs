//! An in-memory canvas that records what would have been drawn.

use crate::error::RenderError;
use crate::path::{PaintMode, PathSegment};
use crate::traits::Canvas;
use carta_layout::Paginate;
use carta_style::TextStyle;
use carta_types::{Color, ImageData, Rect};

/// A single line of text as it was placed. `page` is zero-based.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextOp),
    Path {
        page: usize,
        segments: Vec<PathSegment>,
        mode: PaintMode,
        fill: Color,
        stroke: Color,
    },
    Image {
        page: usize,
        area: Rect,
        len: usize,
    },
}

impl DrawOp {
    pub fn page(&self) -> usize {
        match self {
            DrawOp::Text(op) => op.page,
            DrawOp::Path { page, .. } | DrawOp::Image { page, .. } => *page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    pages: usize,
    fill: Color,
    stroke: Color,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: 1,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    /// All text in drawing order.
    pub fn text_lines(&self) -> Vec<&str> {
        self.texts().map(|t| t.text.as_str()).collect()
    }

    pub fn find_text(&self, needle: &str) -> Option<&TextOp> {
        self.texts().find(|t| t.text == needle)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.text.contains(needle))
    }

    pub fn count_text(&self, needle: &str) -> usize {
        self.texts().filter(|t| t.text == needle).count()
    }

    pub fn images(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image { page, area, .. } => Some((*page, *area)),
            _ => None,
        })
    }

    fn current_page(&self) -> usize {
        self.pages - 1
    }
}

impl Paginate for RecordingCanvas {
    fn start_new_page(&mut self) {
        self.pages += 1;
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, _width: f32) {}

    fn set_line_dash(&mut self, _pattern: &[f32]) {}

    fn text(&mut self, text: &str, x: f32, baseline_y: f32, style: &TextStyle) {
        self.ops.push(DrawOp::Text(TextOp {
            page: self.current_page(),
            x,
            y: baseline_y,
            text: text.to_string(),
            style: *style,
        }));
    }

    fn path(&mut self, segments: &[PathSegment], mode: PaintMode) {
        self.ops.push(DrawOp::Path {
            page: self.current_page(),
            segments: segments.to_vec(),
            mode,
            fill: self.fill,
            stroke: self.stroke,
        });
    }

    fn image(&mut self, data: &ImageData, area: Rect) -> Result<(), RenderError> {
        if data.is_empty() {
            return Err(RenderError::Image("empty image data".into()));
        }
        self.ops.push(DrawOp::Image {
            page: self.current_page(),
            area,
            len: data.len(),
        });
        Ok(())
    }
}
