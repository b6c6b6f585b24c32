use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Receipt;

#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Newest first.
    async fn get_all(&self) -> Result<Vec<Receipt>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Receipt, RepositoryError>;
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Receipt>, RepositoryError>;
    async fn save(&self, receipt: &Receipt) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
