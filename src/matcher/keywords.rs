// file: src/matcher/keywords.rs
// description: splits the raw keyword input into individual search terms
// reference: https://docs.rs/regex

use crate::error::{Result, SearchError};
use crate::text::normalize;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct KeywordSplitter {
    pattern: Regex,
    normalize: bool,
}

impl KeywordSplitter {
    /// Any of `delimiters` separates two keywords.
    pub fn new(delimiters: &[String], normalize: bool) -> Result<Self> {
        if delimiters.is_empty() || delimiters.iter().any(|d| d.is_empty()) {
            return Err(SearchError::InvalidConfiguration(
                "keyword delimiters must be non-empty".to_string(),
            ));
        }

        let alternation = delimiters
            .iter()
            .map(|d| regex::escape(d))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&alternation)
            .map_err(|e| SearchError::InvalidConfiguration(e.to_string()))?;

        Ok(Self { pattern, normalize })
    }

    /// Trimmed, non-empty keywords in input order. Duplicates are kept.
    pub fn split(&self, input: &str) -> Vec<String> {
        self.pattern
            .split(input)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| {
                if self.normalize {
                    normalize(k)
                } else {
                    k.to_string()
                }
            })
            .collect()
    }
}
