use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Topic content is required")]
    MissingTopic,

    #[error("Malformed request body: {0}")]
    InvalidBody(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid API key, please check the configuration")]
    InvalidCredential,

    #[error("API rate limit exceeded, please retry later")]
    RateLimited,

    #[error("AI service error ({status}), please retry later")]
    Upstream { status: u16 },

    #[error("Generation failed, please retry")]
    EmptyGeneration,

    #[error("Not enough titles were generated ({found}), please retry")]
    InsufficientResults { found: usize },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GenerationError {
    /// Errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GenerationError::MissingTopic | GenerationError::InvalidBody(_)
        )
    }
}

pub type Result<T, E = GenerationError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("Favorite '{0}' not found")]
    NotFound(String),

    #[error("Invalid favorite: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_includes_status() {
        let err = GenerationError::Upstream { status: 503 };
        assert_eq!(err.to_string(), "AI service error (503), please retry later");
    }

    #[test]
    fn only_input_errors_are_client_errors() {
        assert!(GenerationError::MissingTopic.is_client_error());
        assert!(GenerationError::InvalidBody("x".into()).is_client_error());
        assert!(!GenerationError::Unauthenticated.is_client_error());
        assert!(!GenerationError::InvalidCredential.is_client_error());
        assert!(!GenerationError::InsufficientResults { found: 2 }.is_client_error());
    }
}
