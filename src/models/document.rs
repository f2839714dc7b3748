// file: src/models/document.rs
// description: uploaded source document model with type sniffing and content hashing
// reference: internal data structures

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Sniffs the kind from the file extension, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::PlainText => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub bytes: Vec<u8>,
    pub declared_kind: Option<DocumentKind>,
    pub content_hash: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let content_hash = Self::compute_hash(&bytes);
        Self {
            name: name.into(),
            bytes,
            declared_kind: None,
            content_hash,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self::new(name, bytes))
    }

    pub fn with_kind(mut self, kind: DocumentKind) -> Self {
        self.declared_kind = Some(kind);
        self
    }

    /// Declared kind wins over the extension.
    pub fn kind(&self) -> Option<DocumentKind> {
        self.declared_kind
            .or_else(|| DocumentKind::from_name(&self.name))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn compute_hash(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_name("report.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_name("notes.final.txt"),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(DocumentKind::from_name("slides.pptx"), None);
        assert_eq!(DocumentKind::from_name("README"), None);
    }

    #[test]
    fn test_declared_kind_overrides_extension() {
        let doc = SourceDocument::new("upload.bin", b"hello".to_vec());
        assert_eq!(doc.kind(), None);

        let doc = doc.with_kind(DocumentKind::PlainText);
        assert_eq!(doc.kind(), Some(DocumentKind::PlainText));
    }

    #[test]
    fn test_hash_consistency() {
        let a = SourceDocument::new("a.txt", b"same bytes".to_vec());
        let b = SourceDocument::new("b.txt", b"same bytes".to_vec());
        assert_eq!(a.content_hash, b.content_hash);
        assert_eq!(a.content_hash.len(), 64);
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sample.txt");
        std::fs::write(&path, "The cat sat.").unwrap();

        let doc = SourceDocument::from_path(&path).unwrap();
        assert_eq!(doc.name, "sample.txt");
        assert_eq!(doc.size(), 12);
        assert_eq!(doc.kind(), Some(DocumentKind::PlainText));

        assert!(SourceDocument::from_path(&temp.path().join("missing.pdf")).is_err());
    }
}
