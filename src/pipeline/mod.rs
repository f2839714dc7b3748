// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod annotate;
mod progress;
mod search;

pub use annotate::RelevanceAnnotator;
pub use progress::{ClassificationCounts, ProgressTracker};
pub use search::SearchPipeline;
