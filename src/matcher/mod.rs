// file: src/matcher/mod.rs
// description: keyword matching and ranking module exports
// reference: internal module structure

pub mod keyword_matcher;
pub mod keywords;
pub mod predicate;
pub mod ranker;

pub use keyword_matcher::{KeywordMatcher, MatchOptions};
pub use keywords::KeywordSplitter;
pub use predicate::KeywordPredicate;
pub use ranker::rank;
