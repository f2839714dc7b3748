// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod extracted;
pub mod keyword_result;
pub mod policy;
pub mod report;

pub use document::{DocumentKind, SourceDocument};
pub use extracted::{DEFAULT_EMPTY_PAGE_PLACEHOLDER, ExtractedText, NonPositivePages, PageNumber};
pub use keyword_result::{KeywordResult, Sentence};
pub use policy::MatchPolicy;
pub use report::{SearchReport, SearchStats};
