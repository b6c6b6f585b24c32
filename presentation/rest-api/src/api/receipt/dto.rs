use chrono::{DateTime, Utc};
use image::ImageFormat;
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use uuid::Uuid;

use business::domain::receipt::model::Receipt;

/// Multipart upload of a receipt photo.
#[derive(Debug, Multipart)]
pub struct CreateReceiptForm {
    /// Display name for the receipt (cannot be empty)
    pub name: String,
    /// Receipt photo (JPEG, PNG or BMP)
    pub image: Upload,
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptResponse {
    pub id: Uuid,
    pub name: String,
    /// Blob key of the stored photo
    pub key: String,
    /// Fields read off the photo; may be an empty object
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            id: receipt.id,
            name: receipt.name,
            key: receipt.key,
            data: receipt.data.into_value(),
            timestamp: receipt.timestamp,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptInsightsRequest {
    /// Receipts to look at together (at least one)
    pub receipt_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptInsightsResponse {
    /// Free-form remarks on spending patterns
    pub insights: String,
}

/// MIME type of a stored photo, guessed from its leading bytes.
pub fn image_content_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Bmp) => "image/bmp",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Tiff) => "image/tiff",
        _ => "application/octet-stream",
    }
}
