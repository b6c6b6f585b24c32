/// Failures of the receipt extraction pipeline.
///
/// `RemoteCallFailed` and `MalformedModelOutput` describe a single attempt and
/// are retried. Only `InvalidImage` and `ExtractionFailed` reach callers.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction.invalid_image")]
    InvalidImage,
    #[error("extraction.remote_call_failed: {0}")]
    RemoteCallFailed(String),
    #[error("extraction.malformed_model_output: {0}")]
    MalformedModelOutput(String),
    #[error("extraction.failed after {attempts} attempts")]
    ExtractionFailed { attempts: u32 },
    #[error("extraction.cache_write_failed")]
    CacheWriteFailed(#[source] crate::domain::errors::RepositoryError),
}
