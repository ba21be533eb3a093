//! PDF output for menu documents.
//!
//! [`LopdfCanvas`] implements the `Canvas` trait by collecting one content
//! stream per page and assembling a `lopdf::Document` when finished. Text is
//! set in the standard Type1 faces with WinAnsi encoding, so nothing is
//! embedded except raster images.

mod canvas;
mod helpers;
mod images;
mod writer;

pub use canvas::LopdfCanvas;
pub use helpers::to_win_ansi;
pub use writer::DocumentInfo;
