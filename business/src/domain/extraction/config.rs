use std::time::Duration;

/// Tuning for the extraction pipeline.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Attempts per `extract` call before giving up. Zero is treated as one.
    pub retry_budget: u32,
    pub model_identifier: String,
    /// Upper bound on each remote call.
    pub request_timeout: Duration,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            retry_budget: 3,
            model_identifier: "llama-3.2-90b-vision-preview".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
