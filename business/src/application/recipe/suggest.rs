use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::extraction::model::ReceiptExtraction;
use crate::domain::logger::Logger;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeIdea;
use crate::domain::recipe::services::RecipeGeneratorService;
use crate::domain::recipe::use_cases::suggest::{SuggestRecipesParams, SuggestRecipesUseCase};

pub struct SuggestRecipesUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub generator: Arc<dyn RecipeGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestRecipesUseCase for SuggestRecipesUseCaseImpl {
    async fn execute(&self, params: SuggestRecipesParams) -> Result<Vec<RecipeIdea>, RecipeError> {
        let mut seen = HashSet::new();
        let ids: Vec<_> = params
            .receipt_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        if ids.is_empty() {
            return Err(RecipeError::NoReceipts);
        }

        self.logger
            .info(&format!("Suggesting recipes from {} receipts", ids.len()));

        let receipts = self.repository.get_by_ids(&ids).await?;
        if receipts.len() != ids.len() {
            return Err(RecipeError::ReceiptNotFound);
        }

        let extractions: Vec<ReceiptExtraction> =
            receipts.into_iter().map(|receipt| receipt.data).collect();
        let ideas = self.generator.suggest(&extractions).await?;

        self.logger
            .info(&format!("Generated {} recipe ideas", ideas.len()));
        Ok(ideas)
    }
}
