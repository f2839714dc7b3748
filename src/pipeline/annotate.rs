// file: src/pipeline/annotate.rs
// description: attaches relevance flags to every attributed sentence
// reference: bounded concurrent stream processing with futures

use super::progress::{ClassificationCounts, ProgressTracker};
use crate::classifier::SentenceClassifier;
use crate::error::{Result, SearchError};
use crate::models::{KeywordResult, PageNumber};
use crate::utils::Validator;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Position of one sentence inside a result set.
#[derive(Debug, Clone, Copy)]
struct SentenceSlot {
    result: usize,
    page: PageNumber,
    index: usize,
}

pub struct RelevanceAnnotator {
    classifier: Option<Arc<dyn SentenceClassifier>>,
    timeout: Duration,
    parallel_requests: usize,
    show_progress: bool,
}

impl RelevanceAnnotator {
    /// Without a classifier every sentence is marked related.
    pub fn new(classifier: Option<Arc<dyn SentenceClassifier>>) -> Self {
        Self {
            classifier,
            timeout: Duration::from_secs(10),
            parallel_requests: 4,
            show_progress: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_parallel_requests(mut self, parallel_requests: usize) -> Self {
        self.parallel_requests = parallel_requests.max(1);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn annotate(&self, results: &mut [KeywordResult]) -> ClassificationCounts {
        let Some(classifier) = &self.classifier else {
            for sentence in results.iter_mut().flat_map(|r| r.sentences_mut()) {
                sentence.is_related = Some(true);
            }
            return ClassificationCounts::default();
        };

        let jobs: Vec<(SentenceSlot, String)> = results
            .iter()
            .enumerate()
            .flat_map(|(result, r)| {
                r.sentences.iter().flat_map(move |(page, sentences)| {
                    sentences.iter().enumerate().map(move |(index, s)| {
                        (
                            SentenceSlot {
                                result,
                                page: *page,
                                index,
                            },
                            s.text.clone(),
                        )
                    })
                })
            })
            .collect();

        if jobs.is_empty() {
            return ClassificationCounts::default();
        }

        debug!(
            "Classifying {} sentences with {} ({} parallel)",
            jobs.len(),
            classifier.name(),
            self.parallel_requests
        );

        let tracker = if self.show_progress {
            ProgressTracker::new(jobs.len())
        } else {
            ProgressTracker::hidden(jobs.len())
        };

        let timeout = self.timeout;
        let outcomes: Vec<(SentenceSlot, bool)> = stream::iter(jobs)
            .map(|(slot, text)| {
                let classifier = Arc::clone(classifier);
                async move {
                    let outcome = classify_with_timeout(classifier.as_ref(), &text, timeout).await;
                    (slot, text, outcome)
                }
            })
            .buffered(self.parallel_requests)
            .map(|(slot, text, outcome)| {
                let related = match outcome {
                    Ok(related) => {
                        tracker.inc_classified();
                        related
                    }
                    Err(e) => {
                        warn!(
                            "Classification failed for \"{}\": {}",
                            Validator::truncate_text(&text, 80),
                            e
                        );
                        tracker.inc_failed();
                        false
                    }
                };
                (slot, related)
            })
            .collect()
            .await;

        for (slot, related) in outcomes {
            if let Some(sentence) = results
                .get_mut(slot.result)
                .and_then(|r| r.sentences.get_mut(&slot.page))
                .and_then(|s| s.get_mut(slot.index))
            {
                sentence.is_related = Some(related);
            }
        }

        tracker.finish();
        tracker.counts()
    }
}

async fn classify_with_timeout(
    classifier: &dyn SentenceClassifier,
    sentence: &str,
    timeout: Duration,
) -> Result<bool> {
    tokio::time::timeout(timeout, classifier.classify(sentence))
        .await
        .map_err(|_| SearchError::ClassificationTimeout(timeout))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentence;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct HealthWords;

    #[async_trait]
    impl SentenceClassifier for HealthWords {
        async fn classify(&self, sentence: &str) -> Result<bool> {
            Ok(sentence.to_lowercase().contains("health"))
        }

        fn name(&self) -> &str {
            "health-words"
        }
    }

    /// Fails on sentences containing "boom"; counts calls.
    struct Flaky {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SentenceClassifier for Flaky {
        async fn classify(&self, sentence: &str) -> Result<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if sentence.contains("boom") {
                return Err(SearchError::Classification("service unavailable".to_string()));
            }
            Ok(true)
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    struct Slow;

    #[async_trait]
    impl SentenceClassifier for Slow {
        async fn classify(&self, _sentence: &str) -> Result<bool> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(true)
        }

        fn name(&self) -> &str {
            "slow"
        }
    }

    fn results() -> Vec<KeywordResult> {
        let mut cat = KeywordResult::absent("cat");
        cat.exists = true;
        cat.pages = vec![1, 2];
        cat.sentences.insert(
            1,
            vec![
                Sentence::new("The cat boom sat."),
                Sentence::new("Cat health matters."),
            ],
        );
        cat.sentences.insert(2, vec![Sentence::new("Another cat.")]);

        vec![cat, KeywordResult::absent("dog")]
    }

    fn flags(results: &[KeywordResult]) -> Vec<Option<bool>> {
        results
            .iter()
            .flat_map(|r| r.sentences.values().flatten().map(|s| s.is_related))
            .collect()
    }

    #[tokio::test]
    async fn test_disabled_marks_everything_related() {
        let mut results = results();
        let counts = RelevanceAnnotator::new(None).annotate(&mut results).await;

        assert_eq!(counts, ClassificationCounts::default());
        assert_eq!(flags(&results), vec![Some(true); 3]);
    }

    #[tokio::test]
    async fn test_results_reattach_in_order() {
        let mut results = results();
        let annotator = RelevanceAnnotator::new(Some(Arc::new(HealthWords)))
            .with_parallel_requests(2);
        let counts = annotator.annotate(&mut results).await;

        assert_eq!(counts.classified, 3);
        assert_eq!(flags(&results), vec![Some(false), Some(true), Some(false)]);
    }

    #[tokio::test]
    async fn test_failure_only_affects_its_sentence() {
        let flaky = Arc::new(Flaky {
            calls: AtomicUsize::new(0),
        });
        let mut results = results();
        let counts = RelevanceAnnotator::new(Some(flaky.clone()))
            .annotate(&mut results)
            .await;

        assert_eq!(flaky.calls.load(Ordering::SeqCst), 3);
        assert_eq!(counts, ClassificationCounts { classified: 2, failed: 1 });
        assert_eq!(flags(&results), vec![Some(false), Some(true), Some(true)]);
        assert_eq!(results[0].pages, vec![1, 2]);
    }

    #[test]
    fn test_long_sentences_are_truncated_in_logs() {
        let long = "health ".repeat(40);
        let shown = Validator::truncate_text(&long, 80);
        assert_eq!(shown.chars().count(), 83);
        assert!(shown.ends_with("..."));
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failure() {
        let mut results = results();
        let counts = RelevanceAnnotator::new(Some(Arc::new(Slow)))
            .with_timeout(Duration::from_millis(50))
            .annotate(&mut results)
            .await;

        assert_eq!(counts.failed, 3);
        assert_eq!(flags(&results), vec![Some(false); 3]);
    }
}
