use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::services::ImageStore;
use crate::domain::receipt::use_cases::get_image::{GetReceiptImageParams, GetReceiptImageUseCase};

pub struct GetReceiptImageUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReceiptImageUseCase for GetReceiptImageUseCaseImpl {
    async fn execute(&self, params: GetReceiptImageParams) -> Result<Vec<u8>, ReceiptError> {
        self.logger
            .info(&format!("Loading image of receipt {}", params.id));

        let receipt = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReceiptError::NotFound,
                other => ReceiptError::Repository(other),
            })?;

        self.image_store
            .load(&receipt.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReceiptError::NotFound,
                other => ReceiptError::ImageStorage(other),
            })
    }
}
