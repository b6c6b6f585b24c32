use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::extraction::errors::ExtractionError;
use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReceiptError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "receipt.name_empty",
            ),
            ReceiptError::NameTooLong { .. } => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "receipt.name_too_long",
            ),
            ReceiptError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "receipt.not_found"),
            ReceiptError::NoneSelected => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "receipt.none_selected",
            ),
            ReceiptError::InsightsFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "GenerationError",
                "receipt.insights_failed",
            ),
            ReceiptError::Extraction(ExtractionError::InvalidImage) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "extraction.invalid_image",
            ),
            ReceiptError::Extraction(ExtractionError::CacheWriteFailed(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "extraction.cache_write_failed",
            ),
            ReceiptError::Extraction(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ExtractionError",
                "extraction.failed",
            ),
            ReceiptError::ImageStorage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "receipt.image_storage",
            ),
            ReceiptError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_exhausted_retries_to_unprocessable_entity() {
        let (status, body) =
            ReceiptError::Extraction(ExtractionError::ExtractionFailed { attempts: 3 })
                .into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.message, "extraction.failed");
    }

    #[test]
    fn should_map_invalid_image_to_bad_request() {
        let (status, _) =
            ReceiptError::Extraction(ExtractionError::InvalidImage).into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_overlong_name_to_bad_request() {
        let (status, body) = ReceiptError::NameTooLong { max: 100 }.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "receipt.name_too_long");
    }

    #[test]
    fn should_map_insights_errors() {
        let (status, _) = ReceiptError::NoneSelected.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = ReceiptError::InsightsFailed.into_error_response();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.name, "GenerationError");
    }

    #[test]
    fn should_map_storage_failures_to_internal_error() {
        let (status, body) =
            ReceiptError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.name, "InternalError");
    }
}
