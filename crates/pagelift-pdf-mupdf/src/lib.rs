use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pagelift_core::{BackendError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// so that callers that only need the domain types do not transitively
/// depend on it.
///
/// The document is loaded from an in-memory buffer rather than by path,
/// so a missing or unreadable source file surfaces as [`BackendError::Io`]
/// before mupdf ever sees the bytes.
#[derive(Debug, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, path: &Path) -> Result<Document, BackendError> {
        let bytes = std::fs::read(path)?;
        Document::from_bytes(&bytes, "application/pdf")
            .map_err(|e| BackendError::OpenError(e.to_string()))
    }
}

impl PdfBackend for MupdfBackend {
    fn page_count(&self, path: &Path) -> Result<usize, BackendError> {
        let document = self.open(path)?;
        let count = document
            .page_count()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
        Ok(count.max(0) as usize)
    }

    fn extract_page_text(&self, path: &Path, page_index: usize) -> Result<String, BackendError> {
        let document = self.open(path)?;

        let page = document
            .load_page(page_index as i32)
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

        // Use block/line iteration to match PyMuPDF's get_text() behavior
        let mut page_text = String::new();
        for block in text_page.blocks() {
            for line in block.lines() {
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                page_text.push_str(&line_text);
                page_text.push('\n');
            }
        }

        Ok(page_text)
    }
}
