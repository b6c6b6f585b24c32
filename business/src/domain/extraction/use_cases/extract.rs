use async_trait::async_trait;

use crate::domain::extraction::errors::ExtractionError;
use crate::domain::extraction::model::ReceiptExtraction;

pub struct ExtractReceiptParams {
    pub image: Vec<u8>,
}

#[async_trait]
pub trait ExtractReceiptUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ExtractReceiptParams,
    ) -> Result<ReceiptExtraction, ExtractionError>;
}
