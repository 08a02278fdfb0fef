use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

pub const NO_FILE_PART: &str = "No file part";
pub const NO_SELECTED_FILE: &str = "No selected file";
pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format";
pub const EXTRACTION_FAILED: &str = "Failed to extract text from document";
pub const LLM_CALL_FAILED: &str = "Failed to parse CV with OpenAI API";
pub const AI_RESPONSE_INVALID: &str = "Failed to parse AI response";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request the body extractor refused (malformed multipart, body too large).
    #[error("Rejected request ({0}): {1}")]
    Rejected(StatusCode, String),

    #[error("Upstream parse error: {0}")]
    UpstreamParse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(_) => {
                AppError::BadRequest(UNSUPPORTED_FORMAT.to_string())
            }
            other => {
                tracing::warn!("Text extraction failed: {other}");
                AppError::BadRequest(EXTRACTION_FAILED.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Rejected(status, msg) => (status, msg),
            AppError::UpstreamParse(msg) => {
                tracing::error!("Upstream error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
