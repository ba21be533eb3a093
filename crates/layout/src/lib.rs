use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Block has a height of {0:.2}mm which exceeds the page content height of {1:.2}mm.")]
    ElementTooLarge(f32, f32),
}

pub mod algorithms;
pub mod cursor;
pub mod estimate;
pub mod fonts;
pub mod text;

pub use self::cursor::{LayoutCursor, Paginate};
pub use self::estimate::BlockEstimate;
pub use self::fonts::{FontMetrics, glyph_width};
pub use self::text::{
    LINE_HEIGHT_FACTOR, TextBlock, line_count, line_height, text_width, truncate_to_width,
    wrap_text,
};
