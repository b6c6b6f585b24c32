use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::extraction::use_cases::extract::{ExtractReceiptParams, ExtractReceiptUseCase};
use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::{NewReceiptProps, Receipt, new_image_key, validate_name};
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::services::ImageStore;
use crate::domain::receipt::use_cases::create::{CreateReceiptParams, CreateReceiptUseCase};

/// Stores the photo, extracts its fields and saves the record. The stored
/// photo is removed again if either later step fails.
pub struct CreateReceiptUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub extractor: Arc<dyn ExtractReceiptUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl CreateReceiptUseCaseImpl {
    async fn discard_image(&self, key: &str) {
        if let Err(err) = self.image_store.delete(key).await {
            self.logger
                .warn(&format!("Could not remove orphaned image {}: {}", key, err));
        }
    }
}

#[async_trait]
impl CreateReceiptUseCase for CreateReceiptUseCaseImpl {
    async fn execute(&self, params: CreateReceiptParams) -> Result<Receipt, ReceiptError> {
        self.logger.info(&format!(
            "Creating receipt '{}' from {} byte image",
            params.name,
            params.image.len()
        ));

        validate_name(&params.name)?;

        let key = new_image_key();
        self.image_store
            .store(&key, &params.image)
            .await
            .map_err(ReceiptError::ImageStorage)?;

        let data = match self
            .extractor
            .execute(ExtractReceiptParams {
                image: params.image,
            })
            .await
        {
            Ok(data) => data,
            Err(err) => {
                self.logger
                    .error(&format!("Extraction failed for image {}: {}", key, err));
                self.discard_image(&key).await;
                return Err(err.into());
            }
        };

        let receipt = Receipt::new(NewReceiptProps {
            name: params.name,
            key: key.clone(),
            data,
        })?;

        if let Err(err) = self.repository.save(&receipt).await {
            self.logger
                .error(&format!("Saving receipt {} failed: {}", receipt.id, err));
            self.discard_image(&key).await;
            return Err(err.into());
        }

        self.logger
            .info(&format!("Receipt created with id: {}", receipt.id));
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::extraction::errors::ExtractionError;
    use crate::domain::extraction::model::ReceiptExtraction;
    use mockall::mock;
    use serde_json::json;
    use uuid::Uuid;

    mock! {
        pub ReceiptRepo {}

        #[async_trait]
        impl ReceiptRepository for ReceiptRepo {
            async fn get_all(&self) -> Result<Vec<Receipt>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Receipt, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Receipt>, RepositoryError>;
            async fn save(&self, receipt: &Receipt) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Images {}

        #[async_trait]
        impl ImageStore for Images {
            async fn store(&self, key: &str, image: &[u8]) -> Result<(), RepositoryError>;
            async fn load(&self, key: &str) -> Result<Vec<u8>, RepositoryError>;
            async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Extractor {}

        #[async_trait]
        impl ExtractReceiptUseCase for Extractor {
            async fn execute(
                &self,
                params: ExtractReceiptParams,
            ) -> Result<ReceiptExtraction, ExtractionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn extraction() -> ReceiptExtraction {
        serde_json::from_value(json!({"store_name": "Corner Shop", "total_amount": 12.5}))
            .unwrap()
    }

    fn params() -> CreateReceiptParams {
        CreateReceiptParams {
            name: "Groceries".to_string(),
            image: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn should_create_receipt_when_extraction_succeeds() {
        let mut images = MockImages::new();
        images
            .expect_store()
            .withf(|key, image| key.len() == 32 && image == [1u8, 2, 3].as_slice())
            .times(1)
            .returning(|_, _| Ok(()));
        images.expect_delete().times(0);

        let mut extractor = MockExtractor::new();
        extractor
            .expect_execute()
            .withf(|params| params.image == vec![1, 2, 3])
            .times(1)
            .returning(|_| Ok(extraction()));

        let mut repo = MockReceiptRepo::new();
        repo.expect_save()
            .withf(|receipt| receipt.name == "Groceries" && receipt.key.len() == 32)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateReceiptUseCaseImpl {
            repository: Arc::new(repo),
            image_store: Arc::new(images),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let receipt = use_case.execute(params()).await.unwrap();

        assert_eq!(receipt.name, "Groceries");
        assert_eq!(receipt.data.store_name(), Some("Corner Shop"));
    }

    #[tokio::test]
    async fn should_reject_empty_name_before_storing_anything() {
        let mut images = MockImages::new();
        images.expect_store().times(0);
        let mut extractor = MockExtractor::new();
        extractor.expect_execute().times(0);

        let use_case = CreateReceiptUseCaseImpl {
            repository: Arc::new(MockReceiptRepo::new()),
            image_store: Arc::new(images),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateReceiptParams {
                name: " ".to_string(),
                image: vec![1],
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_reject_overlong_name_before_storing_anything() {
        let mut images = MockImages::new();
        images.expect_store().times(0);
        let mut extractor = MockExtractor::new();
        extractor.expect_execute().times(0);

        let use_case = CreateReceiptUseCaseImpl {
            repository: Arc::new(MockReceiptRepo::new()),
            image_store: Arc::new(images),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateReceiptParams {
                name: "x".repeat(101),
                image: vec![1],
            })
            .await;

        assert!(matches!(
            result,
            Err(ReceiptError::NameTooLong { max: 100 })
        ));
    }

    #[tokio::test]
    async fn should_remove_image_when_extraction_fails() {
        let mut images = MockImages::new();
        images.expect_store().returning(|_, _| Ok(()));
        images
            .expect_delete()
            .withf(|key| key.len() == 32)
            .times(1)
            .returning(|_| Ok(()));

        let mut extractor = MockExtractor::new();
        extractor
            .expect_execute()
            .returning(|_| Err(ExtractionError::ExtractionFailed { attempts: 3 }));

        let mut repo = MockReceiptRepo::new();
        repo.expect_save().times(0);

        let use_case = CreateReceiptUseCaseImpl {
            repository: Arc::new(repo),
            image_store: Arc::new(images),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result,
            Err(ReceiptError::Extraction(ExtractionError::ExtractionFailed {
                attempts: 3
            }))
        ));
    }

    #[tokio::test]
    async fn should_remove_image_when_saving_record_fails() {
        let mut images = MockImages::new();
        images.expect_store().returning(|_, _| Ok(()));
        images.expect_delete().times(1).returning(|_| Ok(()));

        let mut extractor = MockExtractor::new();
        extractor.expect_execute().returning(|_| Ok(extraction()));

        let mut repo = MockReceiptRepo::new();
        repo.expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateReceiptUseCaseImpl {
            repository: Arc::new(repo),
            image_store: Arc::new(images),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result,
            Err(ReceiptError::Repository(RepositoryError::DatabaseError))
        ));
    }

    #[tokio::test]
    async fn should_keep_original_error_when_cleanup_fails() {
        let mut images = MockImages::new();
        images.expect_store().returning(|_, _| Ok(()));
        images
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut extractor = MockExtractor::new();
        extractor
            .expect_execute()
            .returning(|_| Err(ExtractionError::InvalidImage));

        let use_case = CreateReceiptUseCaseImpl {
            repository: Arc::new(MockReceiptRepo::new()),
            image_store: Arc::new(images),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result,
            Err(ReceiptError::Extraction(ExtractionError::InvalidImage))
        ));
    }

    #[tokio::test]
    async fn should_not_extract_when_image_cannot_be_stored() {
        let mut images = MockImages::new();
        images
            .expect_store()
            .returning(|_, _| Err(RepositoryError::Io(std::io::Error::other("read-only"))));
        let mut extractor = MockExtractor::new();
        extractor.expect_execute().times(0);

        let use_case = CreateReceiptUseCaseImpl {
            repository: Arc::new(MockReceiptRepo::new()),
            image_store: Arc::new(images),
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(ReceiptError::ImageStorage(_))));
    }
}
