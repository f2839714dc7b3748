// file: src/matcher/predicate.rs
// description: token-level match predicates, one per match policy
// reference: internal module structure

use crate::models::MatchPolicy;
use crate::text::strip_diacritics;

/// A keyword prepared once for repeated token tests under a single policy.
#[derive(Debug, Clone)]
pub struct KeywordPredicate {
    policy: MatchPolicy,
    needle: String,
    exact: bool,
}

impl KeywordPredicate {
    pub fn new(policy: MatchPolicy, keyword: &str) -> Self {
        let (needle, exact) = match policy {
            MatchPolicy::SubstringCi => (keyword.to_lowercase(), false),
            MatchPolicy::PrefixCi => (keyword.to_lowercase(), is_all_uppercase(keyword)),
            MatchPolicy::DiacriticInsensitive => (strip_diacritics(keyword), false),
        };

        Self {
            policy,
            needle,
            exact,
        }
    }

    pub fn matches(&self, token: &str) -> bool {
        match self.policy {
            MatchPolicy::SubstringCi => token.to_lowercase().contains(&self.needle),
            MatchPolicy::PrefixCi if self.exact => token.to_lowercase() == self.needle,
            MatchPolicy::PrefixCi => token.to_lowercase().starts_with(&self.needle),
            MatchPolicy::DiacriticInsensitive => strip_diacritics(token).contains(&self.needle),
        }
    }

    pub fn matches_any<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().any(|t| self.matches(t.as_ref()))
    }
}

/// At least one cased character and no lowercase ones ("CAT", "COVID-19").
/// Scripts without case, such as Arabic, never count as upper-case.
pub fn is_all_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
