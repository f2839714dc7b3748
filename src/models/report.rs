// file: src/models/report.rs
// description: ranked search report returned to presentation layers
// reference: replaces the vector search result model

use crate::models::{KeywordResult, MatchPolicy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub pages_extracted: usize,
    pub keywords: usize,
    pub keywords_found: usize,
    pub sentences_classified: usize,
    pub classification_failures: usize,
    pub duration_ms: u64,
}

impl SearchStats {
    pub fn hit_rate(&self) -> f64 {
        if self.keywords == 0 {
            return 0.0;
        }
        (self.keywords_found as f64 / self.keywords as f64) * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub request_id: Uuid,

    /// Name of the searched document
    pub document: String,

    /// SHA-256 of the uploaded bytes
    pub content_hash: String,

    pub generated_at: String,
    pub policy: MatchPolicy,
    pub page_count: usize,

    /// Existing keywords first, input order kept within each group
    pub results: Vec<KeywordResult>,

    pub stats: SearchStats,
}

impl SearchReport {
    pub fn found(&self) -> impl Iterator<Item = &KeywordResult> {
        self.results.iter().filter(|r| r.exists)
    }

    pub fn missing(&self) -> impl Iterator<Item = &KeywordResult> {
        self.results.iter().filter(|r| !r.exists)
    }
}
