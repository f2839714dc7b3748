// file: src/extractor/page.rs
// description: paged document abstraction and logical page numbering
// reference: pdfplumber-style per-page extraction with column splitting

use crate::config::ExtractionConfig;
use crate::error::{Result, SearchError};
use crate::models::{
    DEFAULT_EMPTY_PAGE_PLACEHOLDER, ExtractedText, NonPositivePages, PageNumber,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Part of a page to pull text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRegion {
    Full,
    /// Left of the horizontal midpoint, full height
    LeftHalf,
    /// Right of the horizontal midpoint, full height
    RightHalf,
}

/// A document whose pages can be read one region at a time.
///
/// Indices are zero-based physical positions. Any error is fatal to the
/// whole extraction.
pub trait PagedDocument {
    fn page_count(&self) -> usize;

    fn region_text(&self, index: usize, region: PageRegion) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOptions {
    pub page_offset: i64,
    pub dual_column: bool,
    pub non_positive_pages: NonPositivePages,
    pub empty_page_placeholder: String,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            page_offset: 0,
            dual_column: false,
            non_positive_pages: NonPositivePages::Drop,
            empty_page_placeholder: DEFAULT_EMPTY_PAGE_PLACEHOLDER.to_string(),
        }
    }
}

impl From<&ExtractionConfig> for ExtractionOptions {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            page_offset: config.page_offset,
            dual_column: config.dual_column,
            non_positive_pages: config.non_positive_pages,
            empty_page_placeholder: config.empty_page_placeholder.clone(),
        }
    }
}

pub struct PageExtractor {
    options: ExtractionOptions,
}

impl PageExtractor {
    pub fn new(options: ExtractionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    pub fn extract(&self, document: &dyn PagedDocument) -> Result<ExtractedText> {
        let mut pages: BTreeMap<PageNumber, String> = BTreeMap::new();

        for index in 0..document.page_count() {
            let logical = self.logical_page_number(index).ok_or_else(|| {
                SearchError::InvalidConfiguration(format!(
                    "page offset {} puts physical page {} out of range",
                    self.options.page_offset,
                    index + 1
                ))
            })?;

            if logical <= 0 && self.options.non_positive_pages == NonPositivePages::Drop {
                debug!("Dropping physical page {} (logical {})", index + 1, logical);
                continue;
            }

            let text = self.page_text(document, index)?;
            debug!(
                "Extracted {} chars from physical page {} as page {}",
                text.len(),
                index + 1,
                logical
            );
            pages.insert(logical, text);
        }

        Ok(ExtractedText::from_pages(pages))
    }

    /// `None` when the shifted number does not fit in a `PageNumber`.
    pub fn logical_page_number(&self, index: usize) -> Option<PageNumber> {
        PageNumber::try_from(index)
            .ok()?
            .checked_add(1)?
            .checked_sub(self.options.page_offset)
    }

    fn page_text(&self, document: &dyn PagedDocument, index: usize) -> Result<String> {
        let text = if self.options.dual_column {
            let left = document.region_text(index, PageRegion::LeftHalf)?;
            let right = document.region_text(index, PageRegion::RightHalf)?;
            format!("{}\n{}", left, right)
        } else {
            document.region_text(index, PageRegion::Full)?
        };

        if text.trim().is_empty() {
            Ok(self.options.empty_page_placeholder.clone())
        } else {
            Ok(text)
        }
    }
}
