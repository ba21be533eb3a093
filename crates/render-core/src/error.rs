use thiserror::Error;

/// Failures while putting marks on a canvas or serializing it.
///
/// Image failures are recoverable: templates catch them and draw a
/// placeholder. The other variants abort the document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image could not be embedded: {0}")]
    Image(String),

    #[error("content stream could not be encoded: {0}")]
    Encode(#[from] lopdf::Error),

    #[error("writing document failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// True when a template may fall back to a placeholder instead of
    /// failing the whole document.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RenderError::Image(_))
    }
}
