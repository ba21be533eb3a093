use carta_render_core::{PaintMode, PathSegment};
use carta_style::{FontFace, mm_to_pt};
use carta_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Code points outside Latin-1 that WinAnsiEncoding still carries.
static WIN_ANSI_EXTRAS: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    HashMap::from([
        ('€', 0x80),
        ('‚', 0x82),
        ('„', 0x84),
        ('…', 0x85),
        ('‘', 0x91),
        ('’', 0x92),
        ('“', 0x93),
        ('”', 0x94),
        ('•', 0x95),
        ('–', 0x96),
        ('—', 0x97),
        ('™', 0x99),
        ('Š', 0x8A),
        ('Œ', 0x8C),
        ('Ž', 0x8E),
        ('š', 0x9A),
        ('œ', 0x9C),
        ('ž', 0x9E),
        ('Ÿ', 0x9F),
    ])
});

/// Encodes `s` for a WinAnsi simple font. Characters the encoding lacks
/// become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match WIN_ANSI_EXTRAS.get(&c) {
            Some(&code) => code,
            None if (c as u32) <= 255 => c as u8,
            None => b'?',
        })
        .collect()
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit().into_iter().map(Object::from).collect()
}

/// Content stream and graphics state of one page. State setters only emit
/// an operator when the value actually changes.
#[derive(Debug)]
pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
    dashed: bool,
}

impl PageContext {
    pub fn new(page_height_mm: f32) -> Self {
        Self {
            page_height: page_height_mm,
            content: Content { operations: Vec::new() },
            fill: None,
            stroke: None,
            line_width: None,
            dashed: false,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn point(&self, x: f32, y: f32) -> [Object; 2] {
        [mm_to_pt(x).into(), mm_to_pt(self.page_height - y).into()]
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if self.fill != Some(color) {
            self.push("rg", color_operands(color));
            self.fill = Some(color);
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        if self.stroke != Some(color) {
            self.push("RG", color_operands(color));
            self.stroke = Some(color);
        }
    }

    pub fn set_line_width(&mut self, width_mm: f32) {
        if self.line_width != Some(width_mm) {
            self.push("w", vec![mm_to_pt(width_mm).into()]);
            self.line_width = Some(width_mm);
        }
    }

    pub fn set_line_dash(&mut self, pattern_mm: &[f32]) {
        if pattern_mm.is_empty() && !self.dashed {
            return;
        }
        let dashes: Vec<Object> = pattern_mm.iter().map(|d| mm_to_pt(*d).into()).collect();
        self.push("d", vec![dashes.into(), 0.into()]);
        self.dashed = !pattern_mm.is_empty();
    }

    pub fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32, face: FontFace, size: f32, color: Color) {
        self.set_fill_color(color);
        let [px, py] = self.point(x, baseline_y);
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![
                Object::Name(face.resource_name().as_bytes().to_vec()),
                size.into(),
            ],
        );
        self.push("Td", vec![px, py]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    pub fn draw_path(&mut self, segments: &[PathSegment], mode: PaintMode) {
        if segments.is_empty() {
            return;
        }
        for segment in segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    let ops = self.point(p.x, p.y).to_vec();
                    self.push("m", ops);
                }
                PathSegment::LineTo(p) => {
                    let ops = self.point(p.x, p.y).to_vec();
                    self.push("l", ops);
                }
                PathSegment::CurveTo(c1, c2, end) => {
                    let mut ops = self.point(c1.x, c1.y).to_vec();
                    ops.extend(self.point(c2.x, c2.y));
                    ops.extend(self.point(end.x, end.y));
                    self.push("c", ops);
                }
                PathSegment::Close => self.push("h", vec![]),
            }
        }
        let paint = match mode {
            PaintMode::Fill => "f",
            PaintMode::Stroke => "S",
            PaintMode::FillStroke => "B",
        };
        self.push(paint, vec![]);
    }

    /// Paints image XObject `name` into the box whose top-left corner is
    /// (`x`, `y`) mm.
    pub fn draw_image(&mut self, name: &str, x: f32, y: f32, width: f32, height: f32) {
        let [px, py] = self.point(x, y + height);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                mm_to_pt(width).into(),
                0.into(),
                0.into(),
                mm_to_pt(height).into(),
                px,
                py,
            ],
        );
        self.push("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }
}
