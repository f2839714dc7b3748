// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SearchError};
use crate::models::DocumentKind;
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            SearchError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(SearchError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    /// Only `.pdf` and `.txt` uploads are searchable.
    pub fn validate_supported_extension(path: &Path) -> Result<DocumentKind> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        DocumentKind::from_name(name).ok_or_else(|| SearchError::UnsupportedType {
            name: name.to_string(),
        })
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(SearchError::EmptyDocument);
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SearchError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Parses a page offset given as text. Non-integers are rejected, never defaulted.
    pub fn parse_page_offset(input: &str) -> Result<i64> {
        let offset = input.trim().parse::<i64>().map_err(|_| {
            SearchError::InvalidConfiguration(format!(
                "page offset must be a whole number, got '{}'",
                input
            ))
        })?;

        Self::validate_page_offset(offset)?;
        Ok(offset)
    }

    /// The first physical page must still get a representable page number.
    pub fn validate_page_offset(offset: i64) -> Result<()> {
        1i64.checked_sub(offset).map(|_| ()).ok_or_else(|| {
            SearchError::InvalidConfiguration(format!("page offset {} is out of range", offset))
        })
    }

    /// Converts the printed number of the first physical page into a page offset.
    pub fn parse_first_page(input: &str) -> Result<i64> {
        let first_page = input.trim().parse::<i64>().map_err(|_| {
            SearchError::InvalidConfiguration(format!(
                "first page must be a whole number, got '{}'",
                input
            ))
        })?;

        let offset = first_page.checked_sub(1).ok_or_else(|| {
            SearchError::InvalidConfiguration(format!("first page {} is out of range", first_page))
        })?;

        Self::validate_page_offset(offset)?;
        Ok(offset)
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
