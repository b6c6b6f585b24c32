use std::time::Duration;

use anyhow::{Context, bail};
use business::domain::extraction::config::ExtractionConfig;
use openai::client::DEFAULT_BASE_URL;

const DEFAULT_RECIPE_MODEL: &str = "deepseek-r1-distill-llama-70b";

/// Model endpoint, model names and retry tuning.
///
/// Environment variables:
/// - LLM_API_KEY: bearer token for the chat completion API (required)
/// - LLM_BASE_URL: OpenAI-compatible base URL (default: Groq)
/// - VISION_MODEL: model used to read receipts
/// - RECIPE_MODEL: model used for recipe features
/// - EXTRACTION_RETRY_BUDGET: attempts per extraction (default: 3)
/// - LLM_REQUEST_TIMEOUT_SECS: per-call timeout (default: 30)
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub recipe_model: String,
    pub extraction: ExtractionConfig,
}

impl LlmConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("LLM_API_KEY").context("LLM_API_KEY must be set")?;
        if api_key.trim().is_empty() {
            bail!("LLM_API_KEY must not be empty");
        }

        let defaults = ExtractionConfig::default();
        let retry_budget = match lookup("EXTRACTION_RETRY_BUDGET") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("EXTRACTION_RETRY_BUDGET is not a number: {}", raw))?,
            None => defaults.retry_budget,
        };
        let request_timeout = match lookup("LLM_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .with_context(|| format!("LLM_REQUEST_TIMEOUT_SECS is not a number: {}", raw))?,
            ),
            None => defaults.request_timeout,
        };

        Ok(Self {
            api_key,
            base_url: lookup("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            recipe_model: lookup("RECIPE_MODEL")
                .unwrap_or_else(|| DEFAULT_RECIPE_MODEL.to_string()),
            extraction: ExtractionConfig {
                retry_budget,
                model_identifier: lookup("VISION_MODEL").unwrap_or(defaults.model_identifier),
                request_timeout,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_apply_defaults_when_only_key_is_set() {
        let config = LlmConfig::from_lookup(lookup(&[("LLM_API_KEY", "secret")])).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.recipe_model, DEFAULT_RECIPE_MODEL);
        assert_eq!(config.extraction.retry_budget, 3);
        assert_eq!(config.extraction.model_identifier, "llama-3.2-90b-vision-preview");
        assert_eq!(config.extraction.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_read_overrides() {
        let config = LlmConfig::from_lookup(lookup(&[
            ("LLM_API_KEY", "secret"),
            ("LLM_BASE_URL", "http://localhost:11434/v1"),
            ("VISION_MODEL", "llava"),
            ("EXTRACTION_RETRY_BUDGET", "5"),
            ("LLM_REQUEST_TIMEOUT_SECS", "60"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.extraction.model_identifier, "llava");
        assert_eq!(config.extraction.retry_budget, 5);
        assert_eq!(config.extraction.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn should_require_api_key() {
        assert!(LlmConfig::from_lookup(lookup(&[])).is_err());
        assert!(LlmConfig::from_lookup(lookup(&[("LLM_API_KEY", " ")])).is_err());
    }

    #[test]
    fn should_reject_non_numeric_budget() {
        let result = LlmConfig::from_lookup(lookup(&[
            ("LLM_API_KEY", "secret"),
            ("EXTRACTION_RETRY_BUDGET", "three"),
        ]));

        assert!(result.is_err());
    }
}
