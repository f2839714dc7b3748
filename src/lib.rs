// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod classifier;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod matcher;
pub mod models;
pub mod pipeline;
pub mod text;
pub mod utils;

pub use classifier::{GroqSentenceClassifier, SentenceClassifier, TermListClassifier};
pub use config::{ClassificationConfig, ClassifierProvider, Config, ExtractionConfig, MatchingConfig};
pub use error::{Result, SearchError};
pub use exporter::JsonExporter;
pub use extractor::{DocumentLoader, ExtractionOptions, PageExtractor};
pub use matcher::{KeywordMatcher, MatchOptions, rank};
pub use models::{
    DocumentKind, ExtractedText, KeywordResult, MatchPolicy, NonPositivePages, PageNumber,
    SearchReport, SearchStats, Sentence, SourceDocument,
};
pub use pipeline::{RelevanceAnnotator, SearchPipeline};
pub use text::{normalize, strip_diacritics};
pub use utils::{OperationTimer, Validator};
