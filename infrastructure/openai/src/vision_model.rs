use std::sync::Arc;

use async_trait::async_trait;

use business::domain::extraction::errors::ExtractionError;
use business::domain::extraction::services::VisionModelService;

use crate::client::{ContentPart, OpenAIClient};

pub struct VisionModelOpenAI {
    client: Arc<OpenAIClient>,
}

impl VisionModelOpenAI {
    pub fn new(client: Arc<OpenAIClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VisionModelService for VisionModelOpenAI {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ExtractionError> {
        let content = vec![
            ContentPart::Text { text: prompt },
            ContentPart::jpeg(image_base64),
        ];

        self.client
            .complete(model, content)
            .await
            .map_err(|err| ExtractionError::RemoteCallFailed(err.to_string()))
    }
}
