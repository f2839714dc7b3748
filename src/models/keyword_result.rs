// file: src/models/keyword_result.rs
// description: per-keyword search outcome with page and sentence attribution
// reference: internal data structures

use crate::models::PageNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,

    /// `None` until relevance annotation runs.
    pub is_related: Option<bool>,
}

impl Sentence {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_related: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub keyword: String,
    pub exists: bool,
    pub pages: Vec<PageNumber>,
    pub sentences: BTreeMap<PageNumber, Vec<Sentence>>,
}

impl KeywordResult {
    pub fn absent(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            exists: false,
            pages: Vec::new(),
            sentences: BTreeMap::new(),
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.values().map(Vec::len).sum()
    }

    pub fn sentences_mut(&mut self) -> impl Iterator<Item = &mut Sentence> {
        self.sentences.values_mut().flat_map(|s| s.iter_mut())
    }
}
