use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{RecipeDetails, RecipeIdea};

pub struct RecipeDetailsParams {
    pub idea: RecipeIdea,
    pub show_thinking: bool,
}

#[async_trait]
pub trait RecipeDetailsUseCase: Send + Sync {
    async fn execute(&self, params: RecipeDetailsParams) -> Result<RecipeDetails, RecipeError>;
}
