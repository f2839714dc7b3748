// file: src/models/policy.rs
// description: keyword match policy selection
// reference: internal data structures

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predicate family used to decide whether a token satisfies a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Lowercased token contains the lowercased keyword.
    #[default]
    #[serde(rename = "substring-ci")]
    SubstringCi,

    /// Upper-case keywords need an exact case-insensitive token; others match as a prefix.
    #[serde(rename = "prefix-ci")]
    PrefixCi,

    /// Keyword is a substring of the token once both lose their combining marks.
    #[serde(rename = "diacritic-insensitive-substring")]
    DiacriticInsensitive,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubstringCi => "substring-ci",
            Self::PrefixCi => "prefix-ci",
            Self::DiacriticInsensitive => "diacritic-insensitive-substring",
        }
    }

    /// Keywords are NFKC-normalized before matching under this policy.
    pub fn normalizes_keywords(&self) -> bool {
        matches!(self, Self::DiacriticInsensitive)
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "substring-ci" | "substring" => Ok(Self::SubstringCi),
            "prefix-ci" | "prefix" => Ok(Self::PrefixCi),
            "diacritic-insensitive-substring" | "diacritic-insensitive" | "diacritic" => {
                Ok(Self::DiacriticInsensitive)
            }
            other => Err(SearchError::InvalidConfiguration(format!(
                "unknown match policy '{}'",
                other
            ))),
        }
    }
}
