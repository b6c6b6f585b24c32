use std::sync::Arc;

use poem_openapi::payload::{Binary, Json};
use poem_openapi::{OpenApi, param::Path};
use uuid::Uuid;

use business::domain::receipt::use_cases::create::{CreateReceiptParams, CreateReceiptUseCase};
use business::domain::receipt::use_cases::delete::{DeleteReceiptParams, DeleteReceiptUseCase};
use business::domain::receipt::use_cases::get_all::GetAllReceiptsUseCase;
use business::domain::receipt::use_cases::get_by_id::{
    GetReceiptByIdParams, GetReceiptByIdUseCase,
};
use business::domain::receipt::use_cases::get_image::{
    GetReceiptImageParams, GetReceiptImageUseCase,
};
use business::domain::receipt::use_cases::insights::{
    ReceiptInsightsParams, ReceiptInsightsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::{
    CreateReceiptForm, ReceiptInsightsRequest, ReceiptInsightsResponse, ReceiptResponse,
    image_content_type,
};
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    create_use_case: Arc<dyn CreateReceiptUseCase>,
    get_all_use_case: Arc<dyn GetAllReceiptsUseCase>,
    get_by_id_use_case: Arc<dyn GetReceiptByIdUseCase>,
    get_image_use_case: Arc<dyn GetReceiptImageUseCase>,
    delete_use_case: Arc<dyn DeleteReceiptUseCase>,
    insights_use_case: Arc<dyn ReceiptInsightsUseCase>,
}

impl ReceiptApi {
    pub fn new(
        create_use_case: Arc<dyn CreateReceiptUseCase>,
        get_all_use_case: Arc<dyn GetAllReceiptsUseCase>,
        get_by_id_use_case: Arc<dyn GetReceiptByIdUseCase>,
        get_image_use_case: Arc<dyn GetReceiptImageUseCase>,
        delete_use_case: Arc<dyn DeleteReceiptUseCase>,
        insights_use_case: Arc<dyn ReceiptInsightsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_image_use_case,
            delete_use_case,
            insights_use_case,
        }
    }
}

fn parse_id(id: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(id)
        .map_err(|_| Json(ErrorResponse::new("ValidationError", "receipt.invalid_id")))
}

/// Receipt API
///
/// Upload receipt photos and read back the fields extracted from them.
#[OpenApi]
impl ReceiptApi {
    /// Upload a receipt
    ///
    /// Stores the photo, extracts its fields with the vision model and saves
    /// the receipt. Identical photos are only sent to the model once.
    #[oai(path = "/receipts", method = "post", tag = "ApiTags::Receipts")]
    async fn create_receipt(&self, form: CreateReceiptForm) -> CreateReceiptResponse {
        let image = match form.image.into_vec().await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            _ => {
                return CreateReceiptResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "receipt.image_missing",
                )));
            }
        };

        let params = CreateReceiptParams {
            name: form.name,
            image,
        };

        match self.create_use_case.execute(params).await {
            Ok(receipt) => CreateReceiptResponse::Created(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateReceiptResponse::BadRequest(json),
                    422 => CreateReceiptResponse::UnprocessableEntity(json),
                    _ => CreateReceiptResponse::InternalError(json),
                }
            }
        }
    }

    /// List receipts
    ///
    /// Returns every receipt, newest first.
    #[oai(path = "/receipts", method = "get", tag = "ApiTags::Receipts")]
    async fn get_all_receipts(&self) -> GetAllReceiptsResponse {
        match self.get_all_use_case.execute().await {
            Ok(receipts) => GetAllReceiptsResponse::Ok(Json(
                receipts.into_iter().map(ReceiptResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllReceiptsResponse::InternalError(json)
            }
        }
    }

    /// Get a receipt by ID
    #[oai(path = "/receipts/:id", method = "get", tag = "ApiTags::Receipts")]
    async fn get_receipt_by_id(&self, id: Path<String>) -> GetReceiptByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetReceiptByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetReceiptByIdParams { id })
            .await
        {
            Ok(receipt) => GetReceiptByIdResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetReceiptByIdResponse::NotFound(json),
                    _ => GetReceiptByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Download the receipt photo
    ///
    /// Returns the photo exactly as it was uploaded.
    #[oai(path = "/receipts/:id/image", method = "get", tag = "ApiTags::Receipts")]
    async fn get_receipt_image(&self, id: Path<String>) -> GetReceiptImageResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetReceiptImageResponse::BadRequest(json),
        };

        match self
            .get_image_use_case
            .execute(GetReceiptImageParams { id })
            .await
        {
            Ok(bytes) => {
                let content_type = image_content_type(&bytes).to_string();
                GetReceiptImageResponse::Ok(Binary(bytes), content_type)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetReceiptImageResponse::NotFound(json),
                    _ => GetReceiptImageResponse::InternalError(json),
                }
            }
        }
    }

    /// Spending insights
    ///
    /// Asks the text model what it can infer from the given receipts.
    #[oai(path = "/receipts/insights", method = "post", tag = "ApiTags::Receipts")]
    async fn receipt_insights(
        &self,
        body: Json<ReceiptInsightsRequest>,
    ) -> ReceiptInsightsApiResponse {
        let params = ReceiptInsightsParams {
            receipt_ids: body.0.receipt_ids,
        };

        match self.insights_use_case.execute(params).await {
            Ok(insights) => {
                ReceiptInsightsApiResponse::Ok(Json(ReceiptInsightsResponse { insights }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ReceiptInsightsApiResponse::BadRequest(json),
                    404 => ReceiptInsightsApiResponse::NotFound(json),
                    422 => ReceiptInsightsApiResponse::UnprocessableEntity(json),
                    _ => ReceiptInsightsApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a receipt
    ///
    /// Removes the record and its stored photo.
    #[oai(path = "/receipts/:id", method = "delete", tag = "ApiTags::Receipts")]
    async fn delete_receipt(&self, id: Path<String>) -> DeleteReceiptResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteReceiptResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteReceiptParams { id })
            .await
        {
            Ok(()) => DeleteReceiptResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteReceiptResponse::NotFound(json),
                    _ => DeleteReceiptResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateReceiptResponse {
    #[oai(status = 201)]
    Created(Json<ReceiptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllReceiptsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReceiptResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReceiptByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReceiptImageResponse {
    #[oai(status = 200)]
    Ok(Binary<Vec<u8>>, #[oai(header = "Content-Type")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteReceiptResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReceiptInsightsApiResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptInsightsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
