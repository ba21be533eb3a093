#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use carta::{GeneratedDocument, RecordingCanvas};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generated document reloaded with lopdf.
pub struct GeneratedPdf {
    pub document: GeneratedDocument,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn load(document: GeneratedDocument) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&document.bytes)?;
        Ok(Self { document, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.document.bytes)
    }
}

/// Texts of a recording in drawing order, with their zero-based page.
pub fn placed_texts(canvas: &RecordingCanvas) -> Vec<(usize, String)> {
    canvas.texts().map(|t| (t.page, t.text.clone())).collect()
}
