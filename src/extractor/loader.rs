// file: src/extractor/loader.rs
// description: dispatches a source document to its backend and extracts pages
// reference: internal module structure

use super::page::{ExtractionOptions, PageExtractor};
use super::pdf::{PdfiumDocument, bind_pdfium};
use super::plain::PlainTextDocument;
use crate::config::ExtractionConfig;
use crate::error::{Result, SearchError};
use crate::models::{DocumentKind, ExtractedText, SourceDocument};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct DocumentLoader {
    extractor: PageExtractor,
    pdfium_library_path: Option<PathBuf>,
}

impl DocumentLoader {
    pub fn new(options: ExtractionOptions) -> Self {
        Self {
            extractor: PageExtractor::new(options),
            pdfium_library_path: None,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            extractor: PageExtractor::new(ExtractionOptions::from(config)),
            pdfium_library_path: config.pdfium_library_path.clone(),
        }
    }

    pub fn load(&self, source: &SourceDocument) -> Result<ExtractedText> {
        let kind = source.kind().ok_or_else(|| SearchError::UnsupportedType {
            name: source.name.clone(),
        })?;

        info!(
            "Extracting {} document {} ({} bytes)",
            kind,
            source.name,
            source.size()
        );

        let extracted = match kind {
            DocumentKind::PlainText => {
                let document = PlainTextDocument::parse(&source.bytes);
                self.extractor.extract(&document)?
            }
            DocumentKind::Pdf => {
                let pdfium = bind_pdfium(self.pdfium_library_path.as_deref())?;
                let document = PdfiumDocument::load(&pdfium, &source.bytes)?;
                self.extractor.extract(&document)?
            }
        };

        info!("Extracted {} pages from {}", extracted.page_count(), source.name);
        Ok(extracted)
    }

    /// Same as [`load`](Self::load) but folds any failure into the
    /// error-shaped `ExtractedText` (message as full text, no pages).
    pub fn load_or_sentinel(&self, source: &SourceDocument) -> ExtractedText {
        match self.load(source) {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!("Extraction failed for {}: {}", source.name, e);
                ExtractedText::from_error(&e)
            }
        }
    }
}
