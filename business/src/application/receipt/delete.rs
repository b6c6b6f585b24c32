use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::services::ImageStore;
use crate::domain::receipt::use_cases::delete::{DeleteReceiptParams, DeleteReceiptUseCase};

pub struct DeleteReceiptUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteReceiptUseCase for DeleteReceiptUseCaseImpl {
    async fn execute(&self, params: DeleteReceiptParams) -> Result<(), ReceiptError> {
        self.logger
            .info(&format!("Deleting receipt with id: {}", params.id));

        let receipt = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReceiptError::NotFound,
                other => ReceiptError::Repository(other),
            })?;

        self.repository.delete(receipt.id).await?;

        // The record is gone either way; a missing photo is not an error.
        match self.image_store.delete(&receipt.key).await {
            Ok(()) | Err(RepositoryError::NotFound) => {}
            Err(err) => self.logger.warn(&format!(
                "Receipt {} deleted but image {} remains: {}",
                receipt.id, receipt.key, err
            )),
        }

        Ok(())
    }
}
