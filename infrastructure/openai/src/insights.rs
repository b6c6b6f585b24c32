use std::sync::Arc;

use async_trait::async_trait;

use business::domain::extraction::model::ReceiptExtraction;
use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::services::InsightsGeneratorService;

use crate::client::{ContentPart, OpenAIClient};
use crate::prompt::append_receipts;

const INSIGHTS_PROMPT: &str = "Generate insights from this receipt data. Tell me what you can infer from these receipts: \
patterns you observe, interesting insights, good choices and bad choices.";

pub struct ReceiptInsightsOpenAI {
    client: Arc<OpenAIClient>,
    model: String,
}

impl ReceiptInsightsOpenAI {
    pub fn new(client: Arc<OpenAIClient>, model: String) -> Self {
        Self { client, model }
    }

    fn build_prompt(receipts: &[ReceiptExtraction]) -> String {
        let mut prompt = INSIGHTS_PROMPT.to_string();
        append_receipts(&mut prompt, receipts);
        prompt
    }
}

#[async_trait]
impl InsightsGeneratorService for ReceiptInsightsOpenAI {
    async fn insights(&self, receipts: &[ReceiptExtraction]) -> Result<String, ReceiptError> {
        let prompt = Self::build_prompt(receipts);
        self.client
            .complete(&self.model, vec![ContentPart::Text { text: &prompt }])
            .await
            .map_err(|_| ReceiptError::InsightsFailed)
    }
}
