use async_trait::async_trait;

use super::errors::ExtractionError;

/// Remote vision model: one prompt plus one image in, free text out.
#[async_trait]
pub trait VisionModelService: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ExtractionError>;
}
