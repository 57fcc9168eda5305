//! Unified error handling for the fixture API.
//!
//! Provides the `ApiError` type that maps the error taxonomy to HTTP
//! responses. All route handlers return `Result<T, ApiError>`. Every error
//! is terminal for the triggering call; nothing is retried or escalated.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::CartError;

/// Application-level error type for the fixture API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required input field is absent or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential absent, or login rejected.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Referenced resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // The wire body carries the bare message; the Display prefix is for logs.
        let message = match self {
            Self::Validation(msg) | Self::Authentication(msg) | Self::NotFound(msg) => msg,
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        Self::NotFound(err.to_string())
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
