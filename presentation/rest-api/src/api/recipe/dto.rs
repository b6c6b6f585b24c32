use poem_openapi::Object;
use uuid::Uuid;

use business::domain::recipe::model::{RecipeDetails, RecipeIdea};

#[derive(Debug, Clone, Object)]
pub struct SuggestRecipesRequest {
    /// Receipts whose items should be cooked with (at least one)
    pub receipt_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeIdeaDto {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl From<RecipeIdea> for RecipeIdeaDto {
    fn from(idea: RecipeIdea) -> Self {
        Self {
            name: idea.name,
            ingredients: idea.ingredients,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeSuggestionsResponse {
    pub recipes: Vec<RecipeIdeaDto>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeDetailsRequest {
    pub name: String,
    pub ingredients: Vec<String>,
    /// Keep the model's reasoning block in the answer
    #[oai(default)]
    pub show_thinking: bool,
}

impl RecipeDetailsRequest {
    pub fn into_idea(self) -> (RecipeIdea, bool) {
        (
            RecipeIdea {
                name: self.name,
                ingredients: self.ingredients,
            },
            self.show_thinking,
        )
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeDetailsResponse {
    pub name: String,
    pub instructions: String,
}

impl From<RecipeDetails> for RecipeDetailsResponse {
    fn from(details: RecipeDetails) -> Self {
        Self {
            name: details.name,
            instructions: details.instructions,
        }
    }
}
