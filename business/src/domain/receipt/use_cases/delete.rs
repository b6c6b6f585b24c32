use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::receipt::errors::ReceiptError;

pub struct DeleteReceiptParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteReceiptUseCase: Send + Sync {
    async fn execute(&self, params: DeleteReceiptParams) -> Result<(), ReceiptError>;
}
