use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::LlmClientError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

const TEMPERATURE: f32 = 0.1;

/// Shared HTTP client for an OpenAI-compatible chat completion API.
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
pub struct ImageUrl {
    url: String,
}

impl ContentPart<'_> {
    pub fn jpeg(image_base64: &str) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: format!("data:image/jpeg;base64,{}", image_base64),
            },
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AnswerMessage,
}

#[derive(Deserialize)]
struct AnswerMessage {
    content: Option<String>,
}

impl OpenAIClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends a single user message and returns the first choice's text.
    pub async fn complete(
        &self,
        model: &str,
        content: Vec<ContentPart<'_>>,
    ) -> Result<String, LlmClientError> {
        let body = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content,
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.chat_completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let data: ChatResponse = response.json().await?;
        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmClientError::EmptyAnswer)
    }
}
