//! The resolved, immutable color palette a template draws with.

use crate::parsers::resolve_color;
use carta_types::{Color, ThemeColors};

/// Numeric colors for every semantic role of a theme.
///
/// Built once per document from [`ThemeColors`] and passed by value into the
/// active template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub background: Color,
    pub accent: Color,
    pub price: Color,
}

impl Palette {
    /// Green used for vegetarian markers regardless of theme.
    pub const VEGETARIAN: Color = Color::rgb(34, 197, 94);
    /// Darker green used for vegan markers.
    pub const VEGAN: Color = Color::rgb(21, 128, 61);
    /// Red used for popular hearts and spice glyphs.
    pub const HOT: Color = Color::rgb(239, 68, 68);
    /// Light gray for rules, card borders and placeholders.
    pub const RULE: Color = Color::rgb(209, 213, 219);

    pub fn resolve(theme: &ThemeColors) -> Self {
        Self {
            primary: resolve_color(&theme.primary),
            text: resolve_color(&theme.text),
            muted: resolve_color(&theme.muted_text),
            background: resolve_color(&theme.background),
            accent: resolve_color(&theme.accent),
            price: resolve_color(&theme.price),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::resolve(&ThemeColors::default())
    }
}
