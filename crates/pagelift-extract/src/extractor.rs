use std::fs;
use std::path::{Path, PathBuf};

use pagelift_core::PdfBackend;

use crate::ExtractError;
use crate::banner::{Banner, render_document};

/// Configuration for one extraction run. Source and destination paths are
/// passed to [`PageExtractor::extract`] explicitly; nothing is global.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// 0-based index of the page to extract.
    pub page_index: usize,
    /// Header lines written above the extracted text.
    pub banner: Banner,
}

/// Result of a successful extraction, returned so callers can print the
/// confirmation and preview.
#[derive(Debug)]
pub struct Extraction {
    pub text: String,
    pub page_index: usize,
    pub dest: PathBuf,
}

pub struct PageExtractor {
    config: ExtractConfig,
}

impl PageExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Extract the configured page of `source` and write the banner
    /// document to `dest`, truncating any existing content.
    ///
    /// The page index is validated against the page count before any
    /// extraction or writing happens, so an empty document or an
    /// out-of-range page never leaves a partial output file behind.
    /// The destination's parent directory must already exist.
    pub fn extract(
        &self,
        source: &Path,
        dest: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<Extraction, ExtractError> {
        let page_count = backend.page_count(source)?;
        if page_count == 0 {
            return Err(ExtractError::EmptyDocument);
        }
        let page = self.config.page_index;
        if page >= page_count {
            return Err(ExtractError::PageOutOfRange { page, page_count });
        }

        tracing::debug!(source = %source.display(), page, page_count, "extracting page text");
        let text = backend.extract_page_text(source, page)?;

        let document = render_document(&self.config.banner, &text);
        fs::write(dest, document)?;
        tracing::debug!(dest = %dest.display(), chars = text.chars().count(), "wrote output file");

        Ok(Extraction {
            text,
            page_index: page,
            dest: dest.to_path_buf(),
        })
    }
}
