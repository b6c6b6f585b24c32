#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("request to model endpoint failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("model endpoint answered {status}: {body}")]
    Api { status: u16, body: String },
    #[error("model answer had no message content")]
    EmptyAnswer,
}
