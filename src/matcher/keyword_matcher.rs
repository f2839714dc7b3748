// file: src/matcher/keyword_matcher.rs
// description: per-keyword existence, page attribution and sentence attribution
// reference: internal module structure

use super::keywords::KeywordSplitter;
use super::predicate::KeywordPredicate;
use crate::config::MatchingConfig;
use crate::error::Result;
use crate::models::{ExtractedText, KeywordResult, MatchPolicy, PageNumber, Sentence};
use crate::text::{split_sentences, tokenize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    pub policy: MatchPolicy,
    pub extended_alphabet: bool,
    pub keyword_delimiters: Vec<String>,
    pub sentence_attribution: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::SubstringCi,
            extended_alphabet: false,
            keyword_delimiters: vec![",".to_string()],
            sentence_attribution: true,
        }
    }
}

impl From<&MatchingConfig> for MatchOptions {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            policy: config.policy,
            extended_alphabet: config.extended_alphabet,
            keyword_delimiters: config.keyword_delimiters.clone(),
            sentence_attribution: config.sentence_attribution,
        }
    }
}

/// Tokens and sentences of one page, computed once per request.
struct IndexedPage<'a> {
    number: PageNumber,
    tokens: Vec<String>,
    text: &'a str,
}

pub struct KeywordMatcher {
    options: MatchOptions,
    splitter: KeywordSplitter,
}

impl KeywordMatcher {
    pub fn new(options: MatchOptions) -> Result<Self> {
        let splitter = KeywordSplitter::new(
            &options.keyword_delimiters,
            options.policy.normalizes_keywords(),
        )?;
        Ok(Self { options, splitter })
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn keywords(&self, keywords_input: &str) -> Vec<String> {
        self.splitter.split(keywords_input)
    }

    /// One result per keyword, in input order. Relevance is left unset.
    ///
    /// Expects non-empty extracted text; callers reject empty documents first.
    pub fn match_keywords(
        &self,
        extracted: &ExtractedText,
        keywords_input: &str,
    ) -> Vec<KeywordResult> {
        let extended = self.options.extended_alphabet;
        let full_tokens = tokenize(&extracted.full_text, extended);
        let pages: Vec<IndexedPage<'_>> = extracted
            .pages
            .iter()
            .map(|(number, text)| IndexedPage {
                number: *number,
                tokens: tokenize(text, extended),
                text,
            })
            .collect();

        // sentences are only needed for pages that end up matching
        let mut sentence_cache: BTreeMap<PageNumber, Vec<String>> = BTreeMap::new();

        self.keywords(keywords_input)
            .into_iter()
            .map(|keyword| self.match_keyword(keyword, &full_tokens, &pages, &mut sentence_cache))
            .collect()
    }

    fn match_keyword(
        &self,
        keyword: String,
        full_tokens: &[String],
        pages: &[IndexedPage<'_>],
        sentence_cache: &mut BTreeMap<PageNumber, Vec<String>>,
    ) -> KeywordResult {
        let predicate = KeywordPredicate::new(self.options.policy, &keyword);

        if !predicate.matches_any(full_tokens) {
            debug!("Keyword '{}' not found", keyword);
            return KeywordResult::absent(keyword);
        }

        let mut result = KeywordResult::absent(keyword);
        result.exists = true;

        let needle = result.keyword.to_lowercase();
        for page in pages.iter().filter(|p| predicate.matches_any(&p.tokens)) {
            result.pages.push(page.number);

            if self.options.sentence_attribution {
                let sentences = sentence_cache
                    .entry(page.number)
                    .or_insert_with(|| split_sentences(page.text));

                let matched = sentences
                    .iter()
                    .filter(|s| s.to_lowercase().contains(&needle))
                    .map(|s| Sentence::new(s.as_str()))
                    .collect();
                result.sentences.insert(page.number, matched);
            }
        }

        debug!(
            "Keyword '{}' found on pages {:?}",
            result.keyword, result.pages
        );
        result
    }
}
