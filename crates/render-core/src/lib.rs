//! Core rendering abstractions for menu documents.
//!
//! This crate provides the pieces every backend and template shares:
//! - `Canvas` trait abstracting a paged drawing surface in millimetres
//! - the path model used for vector shapes
//! - stateless drawing primitives in [`painting`]
//! - `RecordingCanvas`, an in-memory backend for structural assertions

mod error;
mod path;
mod traits;
pub mod painting;
pub mod recording;
pub mod utils;

pub use error::RenderError;
pub use path::{KAPPA, PaintMode, PathBuilder, PathSegment};
pub use recording::{DrawOp, RecordingCanvas, TextOp};
pub use traits::Canvas;
