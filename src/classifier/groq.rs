// file: src/classifier/groq.rs
// description: Groq chat completions client answering yes/no topic questions
// reference: https://console.groq.com/docs/api-reference#chat

use super::SentenceClassifier;
use crate::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct GroqSentenceClassifier {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    topic: String,
}

impl GroqSentenceClassifier {
    pub fn new(api_key: String, model: String, endpoint: String, topic: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            endpoint,
            topic,
        }
    }

    fn build_request(&self, sentence: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: format!(
                        "You decide whether a sentence is related to {}. Answer only yes or no.",
                        self.topic
                    ),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: sentence.to_string(),
                },
            ],
            temperature: 0.0,
            max_tokens: 3,
        }
    }
}

/// Any answer starting with "yes", ignoring case and leading punctuation.
pub fn parse_answer(answer: &str) -> bool {
    answer
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
        .starts_with("yes")
}

#[async_trait]
impl SentenceClassifier for GroqSentenceClassifier {
    async fn classify(&self, sentence: &str) -> Result<bool> {
        let request = self.build_request(sentence);

        debug!(
            "Requesting {} classification from Groq for {} chars",
            self.topic,
            sentence.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                SearchError::Classification(format!("Failed to send Groq API request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Classification(format!(
                "Groq API request failed with status {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            SearchError::Classification(format!("Failed to parse Groq API response: {}", e))
        })?;

        let choice = chat_response.choices.into_iter().next().ok_or_else(|| {
            SearchError::Classification("No choices returned from Groq API".to_string())
        })?;

        Ok(parse_answer(&choice.message.content))
    }

    fn name(&self) -> &str {
        "groq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert!(parse_answer("yes"));
        assert!(parse_answer("Yes."));
        assert!(parse_answer("  YES, it is"));
        assert!(parse_answer("\"Yes\""));
        assert!(!parse_answer("no"));
        assert!(!parse_answer(""));
        assert!(!parse_answer("maybe yes"));
    }

    #[test]
    fn test_request_carries_topic_and_sentence() {
        let classifier = GroqSentenceClassifier::new(
            "key".to_string(),
            "llama-3.1-8b-instant".to_string(),
            "https://api.groq.com/openai/v1/chat/completions".to_string(),
            "health".to_string(),
        );
        let request = classifier.build_request("Sleep improves recovery.");
        assert_eq!(request.messages.len(), 2);
        assert!(request.messages[0].content.contains("health"));
        assert_eq!(request.messages[1].content, "Sleep improves recovery.");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_classification_error() {
        let classifier = GroqSentenceClassifier::new(
            "key".to_string(),
            "model".to_string(),
            "http://127.0.0.1:9/chat".to_string(),
            "health".to_string(),
        );
        let result = classifier.classify("anything").await;
        assert!(matches!(result, Err(SearchError::Classification(_))));
    }
}
