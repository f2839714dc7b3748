// file: src/classifier/mod.rs
// description: sentence relevance classifiers and provider selection
// reference: https://docs.rs/async-trait

pub mod groq;
pub mod terms;

pub use groq::GroqSentenceClassifier;
pub use terms::TermListClassifier;

use crate::config::{ClassificationConfig, ClassifierProvider};
use crate::error::{Result, SearchError};
use async_trait::async_trait;
use std::sync::Arc;

/// Decides whether a sentence relates to the configured topic.
#[async_trait]
pub trait SentenceClassifier: Send + Sync {
    async fn classify(&self, sentence: &str) -> Result<bool>;

    fn name(&self) -> &str;
}

/// Builds the configured classifier, or `None` when classification is off.
pub fn from_config(config: &ClassificationConfig) -> Result<Option<Arc<dyn SentenceClassifier>>> {
    if !config.enabled {
        return Ok(None);
    }

    let classifier: Arc<dyn SentenceClassifier> = match config.provider {
        ClassifierProvider::Groq => {
            let api_key = config.api_key.clone().ok_or_else(|| {
                SearchError::InvalidConfiguration(
                    "classification is enabled but no api_key or GROQ_API_KEY is set".to_string(),
                )
            })?;
            Arc::new(GroqSentenceClassifier::new(
                api_key,
                config.model.clone(),
                config.endpoint.clone(),
                config.topic.clone(),
            ))
        }
        ClassifierProvider::Terms => Arc::new(TermListClassifier::new(config.related_terms.clone())),
    };

    Ok(Some(classifier))
}
