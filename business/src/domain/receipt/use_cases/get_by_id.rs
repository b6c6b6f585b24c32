use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::Receipt;

pub struct GetReceiptByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetReceiptByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetReceiptByIdParams) -> Result<Receipt, ReceiptError>;
}
