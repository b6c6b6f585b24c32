use serde::Deserialize;

use super::errors::RecipeError;
use crate::domain::extraction::scanner::first_balanced_object;

/// A dish suggested from purchased ingredients.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeIdea {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecipeIdea {
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.name.trim().is_empty() || self.ingredients.is_empty() {
            return Err(RecipeError::InvalidRecipe);
        }
        Ok(())
    }
}

/// Full instructions for one recipe idea.
#[derive(Debug, Clone)]
pub struct RecipeDetails {
    pub name: String,
    pub instructions: String,
}

#[derive(Deserialize)]
struct RecipeList {
    recipes: Vec<RecipeIdea>,
}

/// Reads `{"recipes":[{"name":..,"ingredients":[..]}]}` out of a model answer.
/// Ideas without a name are dropped.
pub fn parse_recipe_ideas(response: &str) -> Result<Vec<RecipeIdea>, RecipeError> {
    let object = first_balanced_object(response).ok_or(RecipeError::GenerationFailed)?;
    let list: RecipeList =
        serde_json::from_str(object).map_err(|_| RecipeError::GenerationFailed)?;

    Ok(list
        .recipes
        .into_iter()
        .filter(|idea| !idea.name.trim().is_empty())
        .collect())
}

/// Drops reasoning blocks: every line from a `<think>` line through the
/// matching `</think>` line.
pub fn strip_thinking(response: &str) -> String {
    let mut output = String::new();
    let mut thinking = false;

    for line in response.lines() {
        match line.trim() {
            "<think>" => thinking = true,
            "</think>" => thinking = false,
            _ if thinking => {}
            _ => {
                output.push_str(line);
                output.push('\n');
            }
        }
    }

    output
}
