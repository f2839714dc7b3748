// file: src/models/extracted.rs
// description: per-page extraction result and page numbering policy
// reference: internal data structures

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logical page number. May be zero or negative when non-positive pages are kept.
pub type PageNumber = i64;

pub const DEFAULT_EMPTY_PAGE_PLACEHOLDER: &str = "No text found on this page.";

/// What to do with pages whose shifted number falls at or below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonPositivePages {
    #[default]
    Drop,
    Keep,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub full_text: String,
    pub pages: BTreeMap<PageNumber, String>,
}

impl ExtractedText {
    /// Builds the full text from pages in key order, each under a `Page n:` label.
    pub fn from_pages(pages: BTreeMap<PageNumber, String>) -> Self {
        let mut full_text = String::new();
        for (number, text) in &pages {
            full_text.push_str(&format!("Page {}:\n{}\n\n", number, text));
        }

        Self {
            full_text: full_text.trim_end().to_string(),
            pages,
        }
    }

    /// Error-shaped value: descriptive full text and no pages.
    pub fn from_error(error: &SearchError) -> Self {
        Self {
            full_text: error.to_string(),
            pages: BTreeMap::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.full_text.trim().is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_text_layout() {
        let mut pages = BTreeMap::new();
        pages.insert(1, "The cat sat. Health matters.".to_string());
        pages.insert(2, "No mention here.".to_string());

        let extracted = ExtractedText::from_pages(pages);
        assert_eq!(
            extracted.full_text,
            "Page 1:\nThe cat sat. Health matters.\n\nPage 2:\nNo mention here."
        );
        assert_eq!(extracted.page_count(), 2);
        assert!(!extracted.is_sentinel());
    }

    #[test]
    fn test_sentinel_from_error() {
        let sentinel = ExtractedText::from_error(&SearchError::UnsupportedType {
            name: "x.doc".to_string(),
        });
        assert_eq!(sentinel.full_text, "Unsupported file type");
        assert!(sentinel.is_sentinel());
        assert!(!sentinel.is_empty());
    }

    #[test]
    fn test_no_pages_is_empty() {
        let extracted = ExtractedText::from_pages(BTreeMap::new());
        assert!(extracted.is_empty());
    }
}
