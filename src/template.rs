//! The closed set of visual templates and their dispatch.

use crate::config::EngineConfig;
use crate::templates::{Frame, compact, fine_dining, minimalist, modern_grid, tent_margin, traditional};
use carta_render_core::Canvas;
use carta_types::RenderRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// Single column under a colored header band, with thumbnails, badges
    /// and an allergen legend.
    #[default]
    Traditional,
    /// Centered serif layout grouped into courses.
    #[serde(alias = "elegant")]
    FineDining,
    /// Two-column card grid.
    #[serde(rename = "modern", alias = "modern-grid")]
    ModernGrid,
    /// Dense numbered list with leader dots.
    #[serde(alias = "compact-table")]
    Compact,
    /// Airy list with dotted separators.
    Minimalist,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Traditional,
        Template::FineDining,
        Template::ModernGrid,
        Template::Compact,
        Template::Minimalist,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Template::Traditional => "traditional",
            Template::FineDining => "fine-dining",
            Template::ModernGrid => "modern",
            Template::Compact => "compact",
            Template::Minimalist => "minimalist",
        }
    }

    /// Looks up a template by id or alias, ignoring case and surrounding
    /// whitespace.
    pub fn from_id(id: &str) -> Option<Template> {
        let template = match id.trim().to_ascii_lowercase().as_str() {
            "traditional" | "classic" => Template::Traditional,
            "fine-dining" | "fine_dining" | "elegant" => Template::FineDining,
            "modern" | "modern-grid" | "grid" => Template::ModernGrid,
            "compact" | "compact-table" => Template::Compact,
            "minimalist" | "minimal" => Template::Minimalist,
            _ => return None,
        };
        Some(template)
    }

    /// Like [`Template::from_id`], but unknown ids resolve to `default`.
    pub fn resolve(id: &str, default: Template) -> Template {
        Self::from_id(id).unwrap_or_else(|| {
            log::warn!("Unknown template '{id}', using '{}'", default.id());
            default
        })
    }

    /// Lays out the full menu on `canvas`, which must be an A4 portrait
    /// surface with one open page.
    pub(crate) fn render_menu<C: Canvas + ?Sized>(
        self,
        canvas: &mut C,
        request: &RenderRequest,
        config: &EngineConfig,
    ) {
        let mut frame = Frame::new(canvas, request, config, self.menu_margin());
        log::debug!(
            "Rendering menu with '{}' ({} sections)",
            self.id(),
            frame.sections.len()
        );
        match self {
            Template::Traditional => traditional::render_menu(&mut frame),
            Template::FineDining => fine_dining::render_menu(&mut frame),
            Template::ModernGrid => modern_grid::render_menu(&mut frame),
            Template::Compact => compact::render_menu(&mut frame),
            Template::Minimalist => minimalist::render_menu(&mut frame),
        }
    }

    pub(crate) fn render_table_tent<C: Canvas + ?Sized>(
        self,
        canvas: &mut C,
        request: &RenderRequest,
        config: &EngineConfig,
    ) {
        let margin = tent_margin(canvas.page_size());
        let mut frame = Frame::new(canvas, request, config, margin);
        log::debug!("Rendering table tent with '{}'", self.id());
        match self {
            Template::Traditional => traditional::render_table_tent(&mut frame),
            Template::FineDining => fine_dining::render_table_tent(&mut frame),
            Template::ModernGrid => modern_grid::render_table_tent(&mut frame),
            Template::Compact => compact::render_table_tent(&mut frame),
            Template::Minimalist => minimalist::render_table_tent(&mut frame),
        }
    }

    /// Page margin of the menu document in mm.
    pub fn menu_margin(self) -> f32 {
        match self {
            Template::Traditional => traditional::MARGIN,
            Template::FineDining => fine_dining::MARGIN,
            Template::ModernGrid => modern_grid::MARGIN,
            Template::Compact => compact::MARGIN,
            Template::Minimalist => minimalist::MARGIN,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for template in Template::ALL {
            assert_eq!(Template::from_id(template.id()), Some(template));
            let json = serde_json::to_string(&template).unwrap();
            assert_eq!(json, format!("\"{}\"", template.id()));
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!(Template::from_id(" Elegant "), Some(Template::FineDining));
        assert_eq!(Template::from_id("MODERN-GRID"), Some(Template::ModernGrid));
    }

    #[test]
    fn test_unknown_resolves_to_default() {
        assert_eq!(Template::resolve("foobar", Template::Traditional), Template::Traditional);
        assert_eq!(Template::resolve("", Template::Compact), Template::Compact);
    }
}
