use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecipeError::NoReceipts => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.no_receipts",
            ),
            RecipeError::InvalidRecipe => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.invalid_recipe",
            ),
            RecipeError::ReceiptNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "recipe.receipt_not_found",
            ),
            RecipeError::GenerationFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "GenerationError",
                "recipe.generation_failed",
            ),
            RecipeError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
