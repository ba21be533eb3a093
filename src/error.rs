use carta_render_core::RenderError;
use carta_style::StyleParseError;
use thiserror::Error;

/// Everything that can stop a document from being produced.
///
/// Asset and color problems never show up here: they are recovered where
/// they happen. An error means no bytes were emitted.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid page format: {0}")]
    InvalidPageFormat(#[from] StyleParseError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
