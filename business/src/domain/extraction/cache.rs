use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{ImageDigest, ReceiptExtraction};

/// Persistent memo of finished extractions, keyed by image digest.
///
/// Entries are write-once: `put` is only called after a successful attempt
/// and nothing ever removes or refreshes an entry.
#[async_trait]
pub trait ExtractionCache: Send + Sync {
    async fn get(&self, digest: &ImageDigest)
    -> Result<Option<ReceiptExtraction>, RepositoryError>;

    async fn put(
        &self,
        digest: &ImageDigest,
        extraction: &ReceiptExtraction,
    ) -> Result<(), RepositoryError>;

    /// Keeps the raw model text of one attempt for debugging.
    async fn record_raw_response(
        &self,
        digest: &ImageDigest,
        attempt: u32,
        response: &str,
    ) -> Result<(), RepositoryError>;
}
