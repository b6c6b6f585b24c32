use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recipe::use_cases::details::{RecipeDetailsParams, RecipeDetailsUseCase};
use business::domain::recipe::use_cases::suggest::{SuggestRecipesParams, SuggestRecipesUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{
    RecipeDetailsRequest, RecipeDetailsResponse, RecipeSuggestionsResponse, SuggestRecipesRequest,
};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    suggest_use_case: Arc<dyn SuggestRecipesUseCase>,
    details_use_case: Arc<dyn RecipeDetailsUseCase>,
}

impl RecipeApi {
    pub fn new(
        suggest_use_case: Arc<dyn SuggestRecipesUseCase>,
        details_use_case: Arc<dyn RecipeDetailsUseCase>,
    ) -> Self {
        Self {
            suggest_use_case,
            details_use_case,
        }
    }
}

/// Recipe API
///
/// Cooking ideas built from the items on stored receipts.
#[OpenApi]
impl RecipeApi {
    /// Suggest recipes
    ///
    /// Asks the text model for dishes that use the items bought on the given receipts.
    #[oai(path = "/recipes/suggestions", method = "post", tag = "ApiTags::Recipes")]
    async fn suggest_recipes(&self, body: Json<SuggestRecipesRequest>) -> SuggestRecipesResponse {
        let params = SuggestRecipesParams {
            receipt_ids: body.0.receipt_ids,
        };

        match self.suggest_use_case.execute(params).await {
            Ok(ideas) => SuggestRecipesResponse::Ok(Json(RecipeSuggestionsResponse {
                recipes: ideas.into_iter().map(Into::into).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SuggestRecipesResponse::BadRequest(json),
                    404 => SuggestRecipesResponse::NotFound(json),
                    422 => SuggestRecipesResponse::UnprocessableEntity(json),
                    _ => SuggestRecipesResponse::InternalError(json),
                }
            }
        }
    }

    /// Detailed recipe
    ///
    /// Returns step-by-step instructions for one recipe idea.
    #[oai(path = "/recipes/details", method = "post", tag = "ApiTags::Recipes")]
    async fn recipe_details(&self, body: Json<RecipeDetailsRequest>) -> RecipeDetailsApiResponse {
        let (idea, show_thinking) = body.0.into_idea();

        match self
            .details_use_case
            .execute(RecipeDetailsParams {
                idea,
                show_thinking,
            })
            .await
        {
            Ok(details) => RecipeDetailsApiResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RecipeDetailsApiResponse::BadRequest(json),
                    422 => RecipeDetailsApiResponse::UnprocessableEntity(json),
                    _ => RecipeDetailsApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeSuggestionsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecipeDetailsApiResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeDetailsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
