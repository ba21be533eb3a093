use serde::{Deserialize, Serialize};

/// The fixed font set: the standard PDF Type1 faces, which need no embedding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
}

impl FontFace {
    pub const ALL: [FontFace; 6] = [
        FontFace::Helvetica,
        FontFace::HelveticaBold,
        FontFace::HelveticaOblique,
        FontFace::TimesRoman,
        FontFace::TimesBold,
        FontFace::TimesItalic,
    ];

    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
            FontFace::HelveticaOblique => "Helvetica-Oblique",
            FontFace::TimesRoman => "Times-Roman",
            FontFace::TimesBold => "Times-Bold",
            FontFace::TimesItalic => "Times-Italic",
        }
    }

    /// Name of the face in a page's font resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
            FontFace::HelveticaOblique => "F3",
            FontFace::TimesRoman => "F4",
            FontFace::TimesBold => "F5",
            FontFace::TimesItalic => "F6",
        }
    }

    pub fn is_serif(self) -> bool {
        matches!(
            self,
            FontFace::TimesRoman | FontFace::TimesBold | FontFace::TimesItalic
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A family of faces a template draws with: the "clean sans" or the
/// "elegant serif".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Typeface {
    pub regular: FontFace,
    pub bold: FontFace,
    pub italic: FontFace,
}

impl Typeface {
    pub const SANS: Typeface = Typeface {
        regular: FontFace::Helvetica,
        bold: FontFace::HelveticaBold,
        italic: FontFace::HelveticaOblique,
    };

    pub const SERIF: Typeface = Typeface {
        regular: FontFace::TimesRoman,
        bold: FontFace::TimesBold,
        italic: FontFace::TimesItalic,
    };

    /// The face for a weight/style pair. There is no bold-italic face in the
    /// fixed set; bold wins.
    pub fn face(&self, weight: FontWeight, style: FontStyle) -> FontFace {
        match (weight, style) {
            (FontWeight::Bold, _) => self.bold,
            (FontWeight::Regular, FontStyle::Italic) => self.italic,
            (FontWeight::Regular, FontStyle::Normal) => self.regular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_are_unique() {
        let mut names: Vec<_> = FontFace::ALL.iter().map(|f| f.resource_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FontFace::ALL.len());
    }

    #[test]
    fn test_bold_wins_over_italic() {
        assert_eq!(
            Typeface::SERIF.face(FontWeight::Bold, FontStyle::Italic),
            FontFace::TimesBold
        );
        assert_eq!(
            Typeface::SANS.face(FontWeight::Regular, FontStyle::Italic),
            FontFace::HelveticaOblique
        );
    }
}
