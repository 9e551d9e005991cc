use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream details are logged where the failure happens; the response body
/// only ever carries the fixed public message for each kind.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LeetCode profile not found")]
    ProfileNotFound,

    #[error("Failed to generate recommendation")]
    GenerationFailed,

    #[error("Failed to extract character name from recommendation")]
    ExtractionFailed,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ProfileNotFound | AppError::ExtractionFailed => StatusCode::NOT_FOUND,
            AppError::GenerationFailed | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
