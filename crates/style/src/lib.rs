pub mod font;
pub mod page;
pub mod palette;
pub mod parsers;
pub mod text;

pub use font::{FontFace, FontStyle, FontWeight, Typeface};
pub use page::{MM_PER_PT, Orientation, PT_PER_MM, PageFormat, PageSpec, mm_to_pt, pt_to_mm};
pub use palette::Palette;
pub use parsers::{FALLBACK_COLOR, StyleParseError, resolve_color, try_resolve_color};
pub use text::{TextAlign, TextStyle};
