use reqwest::StatusCode;
use thiserror::Error;
use title_core::GenerationError;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, LLMError>;

impl From<LLMError> for GenerationError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::Api { status, .. } => match status.as_u16() {
                401 => GenerationError::InvalidCredential,
                429 => GenerationError::RateLimited,
                code => GenerationError::Upstream { status: code },
            },
            other => GenerationError::Internal(other.to_string()),
        }
    }
}
