//! Text measurement and line breaking in millimetres.

pub mod measure;
pub mod wrapper;

pub use measure::{LINE_HEIGHT_FACTOR, line_height, text_width, truncate_to_width};
pub use wrapper::{TextBlock, line_count, wrap_text};
