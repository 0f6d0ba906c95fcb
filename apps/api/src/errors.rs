use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::feed::error::{FeedError, FeedErrorKind};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status, machine-readable code, message and whether a retry may help.
    fn parts(&self) -> (StatusCode, &'static str, String, bool) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), false),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                false,
            ),
            AppError::Feed(e) => {
                let status = match e.kind {
                    FeedErrorKind::ParsingError => {
                        tracing::error!("Fatal feed error: {e}");
                        StatusCode::BAD_GATEWAY
                    }
                    FeedErrorKind::RateLimit => StatusCode::TOO_MANY_REQUESTS,
                    FeedErrorKind::NetworkError | FeedErrorKind::Unknown => {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                };
                (status, e.kind.code(), e.message.clone(), e.kind.is_retryable())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    false,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, retryable) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
                "retryable": retryable
            }
        }));

        (status, body).into_response()
    }
}
