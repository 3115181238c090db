use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use title_core::{FavoriteError, GenerationError};

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Favorite(#[from] FavoriteError),
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        ApiError::Generation(GenerationError::Unauthenticated)
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        ApiError::Generation(GenerationError::InvalidBody(message.into()))
    }
}

#[derive(Serialize)]
struct JsonError {
    success: bool,
    error: String,
}

impl ResponseError for ApiError {
    // Every upstream failure collapses to 500; callers only see the message.
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Generation(GenerationError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            ApiError::Generation(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Favorite(FavoriteError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Favorite(FavoriteError::Invalid(_)) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonError {
            success: false,
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_class() {
        let cases = [
            (GenerationError::MissingTopic, 400),
            (GenerationError::InvalidBody("x".into()), 400),
            (GenerationError::Unauthenticated, 401),
            (GenerationError::InvalidCredential, 500),
            (GenerationError::RateLimited, 500),
            (GenerationError::Upstream { status: 404 }, 500),
            (GenerationError::EmptyGeneration, 500),
            (GenerationError::InsufficientResults { found: 1 }, 500),
            (GenerationError::Internal("boom".into()), 500),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status_code().as_u16(), expected);
        }
    }

    #[test]
    fn favorite_errors_map_to_404_and_400() {
        assert_eq!(
            ApiError::from(FavoriteError::NotFound("1".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(FavoriteError::Invalid("bad".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn message_is_passed_through() {
        let err = ApiError::from(GenerationError::Internal("socket closed".into()));
        assert_eq!(err.to_string(), "Internal server error: socket closed");
    }
}
