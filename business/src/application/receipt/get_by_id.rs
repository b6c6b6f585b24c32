use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::Receipt;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::use_cases::get_by_id::{GetReceiptByIdParams, GetReceiptByIdUseCase};

pub struct GetReceiptByIdUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReceiptByIdUseCase for GetReceiptByIdUseCaseImpl {
    async fn execute(&self, params: GetReceiptByIdParams) -> Result<Receipt, ReceiptError> {
        self.logger
            .info(&format!("Fetching receipt by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReceiptError::NotFound,
                other => ReceiptError::Repository(other),
            })
    }
}
