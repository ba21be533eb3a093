//! Finalizes a canvas into the document handed back to the caller.

use crate::config::EngineConfig;
use crate::error::GenerationError;
use crate::template::Template;
use carta_render_core::Canvas;
use carta_render_lopdf::{DocumentInfo, LopdfCanvas};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accented letters kept in filenames besides ASCII alphanumerics.
const ALLOWED_ACCENTED: &str = "àáâãäåæçèéêëìíîïñòóôõöøùúûüýÿßÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÑÒÓÔÕÖØÙÚÛÜÝ";

const FALLBACK_STEM: &str = "restaurant";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Menu,
    TableTent,
}

impl DocumentKind {
    fn suffix(self) -> &'static str {
        match self {
            DocumentKind::Menu => "menu",
            DocumentKind::TableTent => "table-tent",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A finished document and the name it should be saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub template: Template,
    pub kind: DocumentKind,
}

/// Reduces `name` to a filesystem-safe, lowercase stem.
///
/// ASCII letters and digits and a fixed set of accented letters survive.
/// Runs of whitespace, hyphens and underscores become a single hyphen;
/// everything else is dropped. An empty result becomes `restaurant`.
pub fn sanitize_filename(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ALLOWED_ACCENTED.contains(ch) {
            if pending_hyphen && !stem.is_empty() {
                stem.push('-');
            }
            pending_hyphen = false;
            stem.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = true;
        }
    }
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

pub fn document_filename(restaurant: &str, kind: DocumentKind) -> String {
    format!("{}-{}.pdf", sanitize_filename(restaurant), kind.suffix())
}

/// Serializes `canvas` exactly once and wraps the bytes with their
/// filename and page count.
pub(crate) fn emit(
    canvas: LopdfCanvas,
    restaurant: &str,
    template: Template,
    kind: DocumentKind,
    config: &EngineConfig,
) -> Result<GeneratedDocument, GenerationError> {
    let page_count = canvas.page_count();
    let title = restaurant.trim();
    let info = DocumentInfo {
        title: Some(if title.is_empty() {
            config.labels.fallback_restaurant.clone()
        } else {
            title.to_string()
        }),
        producer: Some(config.producer.clone()),
    };
    let bytes = canvas.finish(&info)?;
    let filename = document_filename(restaurant, kind);
    log::debug!("Emitting {filename} ({page_count} pages, {} bytes)", bytes.len());
    Ok(GeneratedDocument {
        filename,
        bytes,
        page_count,
        template,
        kind,
    })
}
