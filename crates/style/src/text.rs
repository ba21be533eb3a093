use crate::font::FontFace;
use carta_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// Face, size (points) and fill color of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(face: FontFace, size: f32, color: Color) -> Self {
        Self { face, size, color }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    pub fn with_face(self, face: FontFace) -> Self {
        Self { face, ..self }
    }
}
