// file: src/classifier/terms.rs
// description: offline relevance classification against a configured term list
// reference: configurable keyword-based classification

use super::SentenceClassifier;
use crate::error::Result;
use async_trait::async_trait;

pub struct TermListClassifier {
    terms: Vec<String>,
}

impl TermListClassifier {
    pub fn new(terms: Vec<String>) -> Self {
        let terms = terms
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Returns the first configured term the sentence mentions.
    pub fn matching_term(&self, sentence: &str) -> Option<&str> {
        let sentence = sentence.to_lowercase();
        self.terms
            .iter()
            .find(|term| sentence.contains(term.as_str()))
            .map(String::as_str)
    }
}

#[async_trait]
impl SentenceClassifier for TermListClassifier {
    async fn classify(&self, sentence: &str) -> Result<bool> {
        Ok(self.matching_term(sentence).is_some())
    }

    fn name(&self) -> &str {
        "terms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_term_with_rules() {
        let classifier =
            TermListClassifier::new(vec!["Nutrition".to_string(), " sleep ".to_string()]);

        assert_eq!(
            classifier.matching_term("Good NUTRITION helps."),
            Some("nutrition")
        );
        assert_eq!(classifier.matching_term("Sleeping well."), Some("sleep"));
        assert_eq!(classifier.matching_term("The cat sat."), None);
    }

    #[test]
    fn test_blank_terms_are_ignored() {
        let classifier = TermListClassifier::new(vec!["".to_string(), "  ".to_string()]);
        assert_eq!(classifier.matching_term("anything at all"), None);
    }

    #[tokio::test]
    async fn test_classify() {
        let classifier = TermListClassifier::new(vec!["health".to_string()]);
        assert!(classifier.classify("Health matters.").await.unwrap());
        assert!(!classifier.classify("The cat sat.").await.unwrap());
    }
}
