use async_trait::async_trait;

use crate::domain::extraction::model::ReceiptExtraction;

use super::errors::RecipeError;
use super::model::RecipeIdea;

/// Text model port for recipe features.
#[async_trait]
pub trait RecipeGeneratorService: Send + Sync {
    /// Dishes that can be cooked from the items on the given receipts.
    async fn suggest(&self, receipts: &[ReceiptExtraction]) -> Result<Vec<RecipeIdea>, RecipeError>;

    /// Raw model answer with detailed instructions, reasoning included.
    async fn describe(&self, idea: &RecipeIdea) -> Result<String, RecipeError>;
}
