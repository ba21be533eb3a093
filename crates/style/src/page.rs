//! Physical page formats and unit conversion.
use crate::parsers::{StyleParseError, parse_orientation, parse_page_format};
use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;
/// Millimetres per point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt * MM_PER_PT
}

/// The two physical formats the engine prints on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PageFormat {
    #[default]
    A4,
    A6,
}

impl PageFormat {
    /// Portrait dimensions in millimetres.
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::A6 => (105.0, 148.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// A format together with its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageSpec {
    pub format: PageFormat,
    pub orientation: Orientation,
}

impl PageSpec {
    pub const A4_PORTRAIT: PageSpec = PageSpec {
        format: PageFormat::A4,
        orientation: Orientation::Portrait,
    };

    pub fn new(format: PageFormat, orientation: Orientation) -> Self {
        Self { format, orientation }
    }

    /// Parses the loosely typed format/orientation pair from a request.
    pub fn parse(format: &str, orientation: &str) -> Result<Self, StyleParseError> {
        Ok(Self {
            format: parse_page_format(format)?,
            orientation: parse_orientation(orientation)?,
        })
    }

    /// `(width, height)` in millimetres, honoring the orientation.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        let (w, h) = self.format.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn dimensions_pt(&self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (mm_to_pt(w), mm_to_pt(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_dimensions() {
        let spec = PageSpec::new(PageFormat::A6, Orientation::Landscape);
        assert_eq!(spec.dimensions_mm(), (148.0, 105.0));
    }

    #[test]
    fn test_a4_in_points() {
        let (w, h) = PageSpec::A4_PORTRAIT.dimensions_pt();
        assert!((w - 595.28).abs() < 0.01);
        assert!((h - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(PageSpec::parse("Letter", "portrait").is_err());
        assert_eq!(
            PageSpec::parse("A4", "landscape"),
            Ok(PageSpec::new(PageFormat::A4, Orientation::Landscape))
        );
    }
}
