use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::Receipt;

#[async_trait]
pub trait GetAllReceiptsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Receipt>, ReceiptError>;
}
