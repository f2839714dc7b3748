// file: src/pipeline/search.rs
// description: single-request search flow from uploaded bytes to ranked report
// reference: orchestrates extraction, matching and relevance annotation

use super::annotate::RelevanceAnnotator;
use crate::classifier::{self, SentenceClassifier};
use crate::config::{ClassificationConfig, Config};
use crate::error::Result;
use crate::extractor::DocumentLoader;
use crate::matcher::{KeywordMatcher, MatchOptions, rank};
use crate::models::{ExtractedText, SearchReport, SearchStats, SourceDocument};
use crate::utils::{OperationTimer, Validator};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

pub struct SearchPipeline {
    config: Config,
    loader: DocumentLoader,
    matcher: KeywordMatcher,
    annotator: RelevanceAnnotator,
}

impl SearchPipeline {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let loader = DocumentLoader::from_config(&config.extraction);
        let matcher = KeywordMatcher::new(MatchOptions::from(&config.matching))?;
        let classifier = classifier::from_config(&config.classification)?;
        let annotator = build_annotator(&config.classification, classifier);

        Ok(Self {
            config,
            loader,
            matcher,
            annotator,
        })
    }

    /// Replaces the configured classifier, enabling relevance classification.
    pub fn with_classifier(mut self, classifier: Arc<dyn SentenceClassifier>) -> Self {
        self.annotator = build_annotator(&self.config.classification, Some(classifier));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn extract(&self, source: &SourceDocument) -> Result<ExtractedText> {
        self.loader.load(source)
    }

    pub async fn search(&self, source: &SourceDocument, keywords: &str) -> Result<SearchReport> {
        let timer = OperationTimer::new(&format!("search {}", source.name));

        let extraction_timer = OperationTimer::new("extraction");
        let extracted = self.extract(source)?;
        extraction_timer.finish();
        Validator::validate_content_not_empty(&extracted.full_text)?;

        let matching_timer = OperationTimer::new("matching");
        let mut results = self.matcher.match_keywords(&extracted, keywords);
        matching_timer.finish_with_count(results.len());

        let annotation_timer = OperationTimer::new("relevance annotation");
        let counts = self.annotator.annotate(&mut results).await;
        annotation_timer.warn_if_slow(
            Duration::from_secs(self.config.classification.timeout_secs),
            "classification took longer than one request timeout",
        );
        annotation_timer.finish_with_count(counts.total());

        let results = rank(results);

        let keywords_found = results.iter().filter(|r| r.exists).count();
        info!(
            "Found {}/{} keywords in {}",
            keywords_found,
            results.len(),
            source.name
        );

        let stats = SearchStats {
            pages_extracted: extracted.page_count(),
            keywords: results.len(),
            keywords_found,
            sentences_classified: counts.classified,
            classification_failures: counts.failed,
            duration_ms: timer.finish_with_count(results.len()).as_millis() as u64,
        };

        Ok(SearchReport {
            request_id: Uuid::new_v4(),
            document: source.name.clone(),
            content_hash: source.content_hash.clone(),
            generated_at: Utc::now().to_rfc3339(),
            policy: self.matcher.options().policy,
            page_count: extracted.page_count(),
            results,
            stats,
        })
    }
}

fn build_annotator(
    config: &ClassificationConfig,
    classifier: Option<Arc<dyn SentenceClassifier>>,
) -> RelevanceAnnotator {
    RelevanceAnnotator::new(classifier)
        .with_timeout(Duration::from_secs(config.timeout_secs))
        .with_parallel_requests(config.parallel_requests)
        .with_progress(config.show_progress)
}
