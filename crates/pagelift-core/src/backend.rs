use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level PDF operations (load the document,
/// count pages, pull one page's plain text); the output composition and
/// file writing live in [`pagelift_extract::PageExtractor`]. Text content
/// is an opaque pass-through: no guarantee is made about reading order or
/// whitespace normalization beyond what the underlying library produces.
pub trait PdfBackend: Send + Sync {
    /// Number of pages in the document at `path`.
    fn page_count(&self, path: &Path) -> Result<usize, BackendError>;

    /// Extract the plain text content of one page (0-based index).
    fn extract_page_text(&self, path: &Path, page_index: usize) -> Result<String, BackendError>;
}
