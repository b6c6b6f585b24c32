use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeIdea;

pub struct SuggestRecipesParams {
    pub receipt_ids: Vec<Uuid>,
}

#[async_trait]
pub trait SuggestRecipesUseCase: Send + Sync {
    async fn execute(&self, params: SuggestRecipesParams) -> Result<Vec<RecipeIdea>, RecipeError>;
}
