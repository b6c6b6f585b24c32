use std::sync::Arc;

use async_trait::async_trait;

use business::domain::extraction::model::ReceiptExtraction;
use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{RecipeIdea, parse_recipe_ideas};
use business::domain::recipe::services::RecipeGeneratorService;

use crate::client::{ContentPart, OpenAIClient};
use crate::prompt::append_receipts;

const SUGGESTION_PROMPT: &str = r#"These are receipts. Suggest some dishes I can make with the purchased ingredients.

Answer in the following format:
{
    "recipes": [
        {"name": "Recipe Name", "ingredients": ["Ingredient 1", "Ingredient 2", "Ingredient 3"]},
        {"name": "Recipe Name", "ingredients": ["Ingredient 1", "Ingredient 2", "Ingredient 3"]}
    ]
}
Output only a single JSON object with the list of recipes."#;

pub struct RecipeGeneratorOpenAI {
    client: Arc<OpenAIClient>,
    model: String,
}

impl RecipeGeneratorOpenAI {
    pub fn new(client: Arc<OpenAIClient>, model: String) -> Self {
        Self { client, model }
    }

    fn build_suggestion_prompt(receipts: &[ReceiptExtraction]) -> String {
        let mut prompt = SUGGESTION_PROMPT.to_string();
        append_receipts(&mut prompt, receipts);
        prompt
    }

    fn build_details_prompt(idea: &RecipeIdea) -> String {
        format!(
            "Can you generate a detailed recipe for {} using the following ingredients: {}",
            idea.name,
            idea.ingredients.join(", ")
        )
    }

    async fn ask(&self, prompt: &str) -> Result<String, RecipeError> {
        self.client
            .complete(&self.model, vec![ContentPart::Text { text: prompt }])
            .await
            .map_err(|_| RecipeError::GenerationFailed)
    }
}

#[async_trait]
impl RecipeGeneratorService for RecipeGeneratorOpenAI {
    async fn suggest(&self, receipts: &[ReceiptExtraction]) -> Result<Vec<RecipeIdea>, RecipeError> {
        let answer = self.ask(&Self::build_suggestion_prompt(receipts)).await?;
        parse_recipe_ideas(&answer)
    }

    async fn describe(&self, idea: &RecipeIdea) -> Result<String, RecipeError> {
        self.ask(&Self::build_details_prompt(idea)).await
    }
}
