use std::path::Path;

use thiserror::Error;

pub mod banner;
pub mod extractor;
pub mod preview;

pub use banner::{Banner, SEPARATOR_WIDTH, render_document};
pub use extractor::{ExtractConfig, Extraction, PageExtractor};
pub use preview::{PREVIEW_CHAR_LIMIT, preview};
// Re-export the backend seam from core (canonical definitions live there)
pub use pagelift_core::{BackendError, PdfBackend};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("document has no pages")]
    EmptyDocument,
    #[error("page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },
    #[error("backend error: {0}")]
    Backend(#[from] pagelift_core::BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract one page of a PDF to a text file using the given backend.
///
/// Pipeline:
/// 1. Resolve the configured page index against the document's page count
/// 2. Extract the page's plain text via `backend`
/// 3. Compose the banner document and write it to `dest` in one operation
pub fn extract_page(
    source: &Path,
    dest: &Path,
    config: ExtractConfig,
    backend: &dyn PdfBackend,
) -> Result<Extraction, ExtractError> {
    PageExtractor::new(config).extract(source, dest, backend)
}
