use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::extraction::model::ReceiptExtraction;
use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::services::InsightsGeneratorService;
use crate::domain::receipt::use_cases::insights::{ReceiptInsightsParams, ReceiptInsightsUseCase};
use crate::domain::recipe::model::strip_thinking;

pub struct ReceiptInsightsUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub generator: Arc<dyn InsightsGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReceiptInsightsUseCase for ReceiptInsightsUseCaseImpl {
    async fn execute(&self, params: ReceiptInsightsParams) -> Result<String, ReceiptError> {
        let mut seen = HashSet::new();
        let ids: Vec<_> = params
            .receipt_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        if ids.is_empty() {
            return Err(ReceiptError::NoneSelected);
        }

        self.logger
            .info(&format!("Generating insights for {} receipts", ids.len()));

        let receipts = self.repository.get_by_ids(&ids).await?;
        if receipts.len() != ids.len() {
            return Err(ReceiptError::NotFound);
        }

        let extractions: Vec<ReceiptExtraction> =
            receipts.into_iter().map(|receipt| receipt.data).collect();
        let answer = self.generator.insights(&extractions).await.map_err(|err| {
            self.logger
                .error(&format!("Insights generation failed: {}", err));
            err
        })?;

        Ok(strip_thinking(&answer).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::receipt::model::Receipt;
    use chrono::Utc;
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
        pub Generator {}

        #[async_trait]
        impl InsightsGeneratorService for Generator {
            async fn insights(&self, receipts: &[ReceiptExtraction]) -> Result<String, ReceiptError>;
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

    fn receipt(id: Uuid, total: f64) -> Receipt {
        Receipt::from_repository(
            id,
            "Groceries".to_string(),
            "0123456789abcdef0123456789abcdef".to_string(),
            serde_json::from_value(json!({ "total_amount": total })).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_return_insights_without_reasoning() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut repo = MockReceiptRepo::new();
        repo.expect_get_by_ids()
            .withf(move |ids| ids == [first, second])
            .times(1)
            .returning(move |_| Ok(vec![receipt(first, 12.5), receipt(second, 3.0)]));

        let mut generator = MockGenerator::new();
        generator
            .expect_insights()
            .withf(|receipts| {
                receipts.len() == 2 && receipts[0].total_amount() == Some(12.5)
            })
            .times(1)
            .returning(|_| {
                Ok("<think>\nadding up\n</think>\n\nYou buy a lot of snacks.\n".to_string())
            });

        let use_case = ReceiptInsightsUseCaseImpl {
            repository: Arc::new(repo),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let insights = use_case
            .execute(ReceiptInsightsParams {
                receipt_ids: vec![first, second, second],
            })
            .await
            .unwrap();

        assert_eq!(insights, "You buy a lot of snacks.");
    }

    #[tokio::test]
    async fn should_reject_empty_selection() {
        let mut repo = MockReceiptRepo::new();
        repo.expect_get_by_ids().times(0);

        let use_case = ReceiptInsightsUseCaseImpl {
            repository: Arc::new(repo),
            generator: Arc::new(MockGenerator::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReceiptInsightsParams {
                receipt_ids: vec![],
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::NoneSelected)));
    }

    #[tokio::test]
    async fn should_not_ask_model_when_a_receipt_is_missing() {
        let known = Uuid::new_v4();
        let mut repo = MockReceiptRepo::new();
        repo.expect_get_by_ids()
            .returning(move |_| Ok(vec![receipt(known, 1.0)]));
        let mut generator = MockGenerator::new();
        generator.expect_insights().times(0);

        let use_case = ReceiptInsightsUseCaseImpl {
            repository: Arc::new(repo),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReceiptInsightsParams {
                receipt_ids: vec![known, Uuid::new_v4()],
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::NotFound)));
    }

    #[tokio::test]
    async fn should_propagate_generation_failure() {
        let id = Uuid::new_v4();
        let mut repo = MockReceiptRepo::new();
        repo.expect_get_by_ids()
            .returning(move |_| Ok(vec![receipt(id, 1.0)]));
        let mut generator = MockGenerator::new();
        generator
            .expect_insights()
            .returning(|_| Err(ReceiptError::InsightsFailed));

        let use_case = ReceiptInsightsUseCaseImpl {
            repository: Arc::new(repo),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReceiptInsightsParams {
                receipt_ids: vec![id],
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::InsightsFailed)));
    }
}
