// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported file type")]
    UnsupportedType { name: String },

    #[error("Error reading {kind}: {message}")]
    Extraction { kind: String, message: String },

    #[error("The uploaded file is empty. Please upload a valid file.")]
    EmptyDocument,

    #[error("Classification failed: {0}")]
    Classification(String),

    #[error("Classification timed out after {0:?}")]
    ClassificationTimeout(Duration),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SearchError {
    pub fn extraction(kind: impl Into<String>, message: impl ToString) -> Self {
        Self::Extraction {
            kind: kind.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let unsupported = SearchError::UnsupportedType {
            name: "notes.docx".to_string(),
        };
        assert_eq!(unsupported.to_string(), "Unsupported file type");

        let pdf = SearchError::extraction("PDF", "bad xref table");
        assert_eq!(pdf.to_string(), "Error reading PDF: bad xref table");

        assert_eq!(
            SearchError::EmptyDocument.to_string(),
            "The uploaded file is empty. Please upload a valid file."
        );
    }
}
