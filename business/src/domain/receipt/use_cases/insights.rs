use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::receipt::errors::ReceiptError;

pub struct ReceiptInsightsParams {
    pub receipt_ids: Vec<Uuid>,
}

#[async_trait]
pub trait ReceiptInsightsUseCase: Send + Sync {
    async fn execute(&self, params: ReceiptInsightsParams) -> Result<String, ReceiptError>;
}
