use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::Receipt;

pub struct CreateReceiptParams {
    pub name: String,
    pub image: Vec<u8>,
}

#[async_trait]
pub trait CreateReceiptUseCase: Send + Sync {
    async fn execute(&self, params: CreateReceiptParams) -> Result<Receipt, ReceiptError>;
}
