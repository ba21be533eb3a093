//! Advance widths for the fixed standard-14 face set.
//!
//! The engine never embeds fonts, so measurement comes from the Adobe font
//! metrics of the standard Type1 faces, in 1/1000 em units. Only printable
//! ASCII is tabulated; Latin-1 letters with diacritics borrow the width of
//! their base letter, and a handful of typographic symbols that the
//! WinAnsi encoding carries have their own entries.

use carta_style::FontFace;

const FIRST: u32 = 32;
const LAST: u32 = 126;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // 32..=47
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 48..=63
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 64..=79
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 80..=95
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 96..=111
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 112..=126
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

/// Metrics of one face: its ASCII table plus the fallback width used for
/// characters it has no entry for.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    widths: &'static [u16; 95],
    default_width: u16,
    serif: bool,
}

impl FontMetrics {
    pub fn for_face(face: FontFace) -> Self {
        // Oblique shares the upright Helvetica advances.
        let widths = match face {
            FontFace::Helvetica | FontFace::HelveticaOblique => &HELVETICA,
            FontFace::HelveticaBold => &HELVETICA_BOLD,
            FontFace::TimesRoman => &TIMES_ROMAN,
            FontFace::TimesBold => &TIMES_BOLD,
            FontFace::TimesItalic => &TIMES_ITALIC,
        };
        let serif = face.is_serif();
        Self {
            widths,
            default_width: if serif { 500 } else { 556 },
            serif,
        }
    }

    /// Advance width of `ch` in 1/1000 em.
    pub fn glyph_width(&self, ch: char) -> u16 {
        if let Some(w) = self.ascii_width(ch) {
            return w;
        }
        if let Some(base) = fold_to_ascii(ch) {
            return self.ascii_width(base).unwrap_or(self.default_width);
        }
        self.symbol_width(ch).unwrap_or(self.default_width)
    }

    fn ascii_width(&self, ch: char) -> Option<u16> {
        let code = ch as u32;
        if (FIRST..=LAST).contains(&code) {
            Some(self.widths[(code - FIRST) as usize])
        } else {
            None
        }
    }

    fn symbol_width(&self, ch: char) -> Option<u16> {
        let (sans, serif) = match ch {
            '\u{a0}' => return self.ascii_width(' '),
            '€' => (556, 500),
            '•' => (350, 350),
            '·' => (278, 250),
            '–' => (556, 500),
            '—' => (1000, 1000),
            '‘' | '’' => (222, 333),
            '“' | '”' => (333, 444),
            '…' => (1000, 1000),
            '°' => (400, 400),
            '×' => (584, 564),
            '½' | '¼' | '¾' => (834, 750),
            'Æ' => (1000, 889),
            'æ' => (889, 667),
            'Œ' => (1000, 889),
            'œ' => (944, 722),
            _ => return None,
        };
        Some(if self.serif { serif } else { sans })
    }
}

/// Maps a Latin-1 letter with a diacritic to the ASCII letter whose advance
/// it shares.
fn fold_to_ascii(ch: char) -> Option<char> {
    let base = match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'Þ' => 'P',
        'ß' => 'p',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ð' => 'o',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'þ' => 'p',
        'Š' => 'S',
        'š' => 's',
        'Ž' => 'Z',
        'ž' => 'z',
        'Ÿ' => 'Y',
        _ => return None,
    };
    Some(base)
}

/// Advance width of `ch` in 1/1000 em for `face`.
pub fn glyph_width(face: FontFace, ch: char) -> u16 {
    FontMetrics::for_face(face).glyph_width(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ascii_widths() {
        assert_eq!(glyph_width(FontFace::Helvetica, 'A'), 667);
        assert_eq!(glyph_width(FontFace::Helvetica, 'i'), 222);
        assert_eq!(glyph_width(FontFace::HelveticaBold, 'm'), 889);
        assert_eq!(glyph_width(FontFace::TimesRoman, 'W'), 944);
        assert_eq!(glyph_width(FontFace::TimesItalic, 'z'), 389);
        assert_eq!(glyph_width(FontFace::Helvetica, '~'), 584);
    }

    #[test]
    fn test_oblique_matches_upright() {
        for ch in ' '..='~' {
            assert_eq!(
                glyph_width(FontFace::HelveticaOblique, ch),
                glyph_width(FontFace::Helvetica, ch)
            );
        }
    }

    #[test]
    fn test_accented_letters_fold_to_base() {
        assert_eq!(
            glyph_width(FontFace::Helvetica, 'é'),
            glyph_width(FontFace::Helvetica, 'e')
        );
        assert_eq!(
            glyph_width(FontFace::TimesBold, 'Ü'),
            glyph_width(FontFace::TimesBold, 'U')
        );
    }

    #[test]
    fn test_euro_and_unknown_characters() {
        assert_eq!(glyph_width(FontFace::Helvetica, '€'), 556);
        assert_eq!(glyph_width(FontFace::TimesRoman, '€'), 500);
        assert_eq!(glyph_width(FontFace::Helvetica, '漢'), 556);
        assert_eq!(glyph_width(FontFace::TimesItalic, '漢'), 500);
    }
}
