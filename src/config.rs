// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::models::{DEFAULT_EMPTY_PAGE_PLACEHOLDER, MatchPolicy, NonPositivePages};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub page_offset: i64,
    #[serde(default)]
    pub dual_column: bool,
    #[serde(default)]
    pub non_positive_pages: NonPositivePages,
    #[serde(default = "default_placeholder")]
    pub empty_page_placeholder: String,
    #[serde(default)]
    pub pdfium_library_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub policy: MatchPolicy,
    #[serde(default)]
    pub extended_alphabet: bool,
    #[serde(default = "default_delimiters")]
    pub keyword_delimiters: Vec<String>,
    #[serde(default = "default_true")]
    pub sentence_attribution: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierProvider {
    Groq,
    Terms,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: ClassifierProvider,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default)]
    pub related_terms: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_parallel_requests")]
    pub parallel_requests: usize,
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    DEFAULT_EMPTY_PAGE_PLACEHOLDER.to_string()
}

fn default_delimiters() -> Vec<String> {
    vec![",".to_string()]
}

fn default_provider() -> ClassifierProvider {
    ClassifierProvider::Groq
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_topic() -> String {
    "health".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_parallel_requests() -> usize {
    4
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            page_offset: 0,
            dual_column: false,
            non_positive_pages: NonPositivePages::Drop,
            empty_page_placeholder: default_placeholder(),
            pdfium_library_path: None,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::SubstringCi,
            extended_alphabet: false,
            keyword_delimiters: default_delimiters(),
            sentence_attribution: true,
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_provider(),
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            topic: default_topic(),
            related_terms: vec![],
            timeout_secs: default_timeout_secs(),
            parallel_requests: default_parallel_requests(),
            show_progress: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, Self::environment())
    }

    /// `DOC_SEARCH__SECTION__KEY` variables. Keyword delimiters are given
    /// space-separated, e.g. `DOC_SEARCH__MATCHING__KEYWORD_DELIMITERS=", /"`.
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("DOC_SEARCH")
            .separator("__")
            .try_parsing(true)
            .list_separator(" ")
            .with_list_parse_key("matching.keyword_delimiters")
    }

    pub fn load_with_env(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(environment);

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.apply_env_api_key();
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        let mut config = Self::default();
        config.apply_env_api_key();
        config
    }

    /// Falls back to `GROQ_API_KEY` when no key is configured.
    fn apply_env_api_key(&mut self) {
        if self.classification.api_key.is_none() {
            self.classification.api_key = std::env::var("GROQ_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty());
        }
    }

    pub fn validate(&self) -> Result<()> {
        let delimiters = &self.matching.keyword_delimiters;
        if delimiters.is_empty() || delimiters.iter().any(|d| d.is_empty()) {
            return Err(SearchError::InvalidConfiguration(
                "keyword_delimiters must contain at least one non-empty delimiter".to_string(),
            ));
        }

        Validator::validate_page_offset(self.extraction.page_offset)?;

        if self.extraction.empty_page_placeholder.trim().is_empty() {
            return Err(SearchError::InvalidConfiguration(
                "empty_page_placeholder must not be blank".to_string(),
            ));
        }

        let classification = &self.classification;
        if classification.timeout_secs == 0 {
            return Err(SearchError::InvalidConfiguration(
                "classification timeout_secs must be greater than 0".to_string(),
            ));
        }

        if classification.parallel_requests == 0 {
            return Err(SearchError::InvalidConfiguration(
                "classification parallel_requests must be greater than 0".to_string(),
            ));
        }

        if classification.enabled {
            match classification.provider {
                ClassifierProvider::Groq => {
                    if classification.api_key.is_none() {
                        return Err(SearchError::InvalidConfiguration(
                            "classification is enabled but no api_key or GROQ_API_KEY is set"
                                .to_string(),
                        ));
                    }
                    Validator::validate_url(&classification.endpoint)
                        .map_err(|e| SearchError::InvalidConfiguration(e.to_string()))?;
                }
                ClassifierProvider::Terms => {
                    if classification.related_terms.iter().all(|t| t.trim().is_empty()) {
                        return Err(SearchError::InvalidConfiguration(
                            "terms classifier needs at least one related term".to_string(),
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.matching.keyword_delimiters, vec![","]);
        assert_eq!(config.matching.policy, MatchPolicy::SubstringCi);
        assert_eq!(config.extraction.non_positive_pages, NonPositivePages::Drop);
        assert!(config.matching.sentence_attribution);
        assert!(!config.classification.enabled);
    }

    #[test]
    fn test_rejects_empty_delimiters() {
        let mut config = Config::default_config();
        config.matching.keyword_delimiters = vec![];
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfiguration(_))
        ));

        config.matching.keyword_delimiters = vec![",".to_string(), String::new()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout_and_workers() {
        let mut config = Config::default_config();
        config.classification.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.classification.parallel_requests = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_terms_provider_needs_terms() {
        let mut config = Config::default_config();
        config.classification.enabled = true;
        config.classification.provider = ClassifierProvider::Terms;
        assert!(config.validate().is_err());

        config.classification.related_terms = vec!["health".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_groq_provider_checks_endpoint() {
        let mut config = Config::default_config();
        config.classification.enabled = true;
        config.classification.api_key = Some("test-key".to_string());
        config.classification.endpoint = "api.groq.com".to_string();
        assert!(config.validate().is_err());

        config.classification.endpoint = default_endpoint();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unrepresentable_page_offset() {
        let mut config = Config::default_config();
        config.extraction.page_offset = i64::MIN;
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfiguration(_))
        ));

        config.extraction.page_offset = 4;
        assert!(config.validate().is_ok());
    }

    fn no_env() -> config::Environment {
        Config::environment().source(Some(config::Map::new()))
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.toml");
        std::fs::write(&path, "[matching]\npolicy = \"prefix-ci\"\n").unwrap();

        let config = Config::load_with_env(Some(&path), no_env()).unwrap();
        assert_eq!(config.matching.policy, MatchPolicy::PrefixCi);
        assert_eq!(config.extraction.page_offset, 0);
        assert_eq!(
            config.extraction.empty_page_placeholder,
            DEFAULT_EMPTY_PAGE_PLACEHOLDER
        );
        assert!(!config.classification.enabled);
        assert_eq!(config.classification.parallel_requests, 4);
    }

    #[test]
    fn test_env_overrides_delimiter_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search.toml");
        std::fs::write(&path, "[extraction]\npage_offset = 1\n").unwrap();

        let mut vars = config::Map::new();
        vars.insert(
            "DOC_SEARCH__MATCHING__KEYWORD_DELIMITERS".to_string(),
            ", /".to_string(),
        );
        vars.insert("DOC_SEARCH__EXTRACTION__PAGE_OFFSET".to_string(), "3".to_string());
        let environment = Config::environment().source(Some(vars));

        let config = Config::load_with_env(Some(&path), environment).unwrap();
        assert_eq!(config.matching.keyword_delimiters, vec![",", "/"]);
        assert_eq!(config.extraction.page_offset, 3);
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search.toml");
        std::fs::write(
            &path,
            r#"
[extraction]
page_offset = 2
dual_column = true
non_positive_pages = "keep"

[matching]
policy = "prefix-ci"
keyword_delimiters = [",", "/"]

[classification]
enabled = false
"#,
        )
        .unwrap();

        let config = Config::load_with_env(Some(&path), no_env()).unwrap();
        assert_eq!(config.extraction.page_offset, 2);
        assert!(config.extraction.dual_column);
        assert_eq!(config.extraction.non_positive_pages, NonPositivePages::Keep);
        assert_eq!(
            config.extraction.empty_page_placeholder,
            DEFAULT_EMPTY_PAGE_PLACEHOLDER
        );
        assert_eq!(config.matching.policy, MatchPolicy::PrefixCi);
        assert_eq!(config.matching.keyword_delimiters, vec![",", "/"]);
        assert!(config.matching.sentence_attribution);
        assert_eq!(config.classification.timeout_secs, 10);
    }
}
