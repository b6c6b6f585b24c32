use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::extraction::model::ReceiptExtraction;

use super::errors::ReceiptError;

/// Blob store for receipt photos, addressed by the key kept on the record.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, key: &str, image: &[u8]) -> Result<(), RepositoryError>;
    async fn load(&self, key: &str) -> Result<Vec<u8>, RepositoryError>;
    async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
}

/// Text model port for free-form remarks about spending.
#[async_trait]
pub trait InsightsGeneratorService: Send + Sync {
    /// Raw model answer describing patterns across the given receipts.
    async fn insights(&self, receipts: &[ReceiptExtraction]) -> Result<String, ReceiptError>;
}
