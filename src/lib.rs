//! Printable restaurant menus and table tents.
//!
//! A [`MenuGenerator`] takes a [`RenderRequest`] (restaurant profile,
//! categories, items, theme colors and options) and lays it out with one of
//! five [`Template`]s into a paginated PDF. Layout is a single forward pass:
//! every block is measured, space for it is reserved on the current page (or
//! a new one), and then it is drawn exactly as measured.
//!
//! ```no_run
//! use carta::{MenuGenerator, RenderRequest};
//!
//! let request: RenderRequest = serde_json::from_str(r#"{ "restaurant": { "name": "Nonna" } }"#)?;
//! let document = MenuGenerator::default().generate_menu_document(&request)?;
//! std::fs::write(&document.filename, &document.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod sink;
pub mod template;
mod templates;

pub use config::{CurrencyFormat, EngineConfig, Labels};
pub use content::{MenuSection, display_text, prepare_sections};
pub use error::GenerationError;
pub use generator::MenuGenerator;
pub use sink::{DocumentKind, GeneratedDocument, sanitize_filename};
pub use template::Template;

pub use carta_render_core::{Canvas, RecordingCanvas};
pub use carta_types::{
    AddOn, Allergen, Badges, Category, Decimal, ImageData, ItemExtras, MenuItem, RenderOptions, RenderRequest,
    RestaurantProfile, SizeVariant, ThemeColors, Translation,
};
