use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::receipt::errors::ReceiptError;

pub struct GetReceiptImageParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetReceiptImageUseCase: Send + Sync {
    async fn execute(&self, params: GetReceiptImageParams) -> Result<Vec<u8>, ReceiptError>;
}
