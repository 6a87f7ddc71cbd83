//! # HTTP Errors
//!
//! Transport error type and the single mapping from errors to HTTP
//! status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::errors::StringError;

/// Result type for HTTP handlers
pub type RestResult<T> = Result<T, RestError>;

/// HTTP-level errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing required field or query parameter
    #[error("Missing \"{0}\" field")]
    MissingParam(String),

    /// Body was not valid JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path segment could not be extracted
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Field present with the wrong JSON type
    #[error("\"{0}\" must be a string")]
    InvalidType(String),

    /// No route matched
    #[error("Endpoint not found")]
    EndpointNotFound,

    // ==================
    // Core errors
    // ==================
    #[error("{0}")]
    Core(#[from] StringError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::MissingParam(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::EndpointNotFound => StatusCode::NOT_FOUND,

            RestError::Core(err) => match err {
                // 400 Bad Request
                StringError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                StringError::InvalidFilterParameters(_) => StatusCode::BAD_REQUEST,
                StringError::UntranslatableQuery(_) => StatusCode::BAD_REQUEST,

                // 404 Not Found
                StringError::NotFound => StatusCode::NOT_FOUND,

                // 409 Conflict
                StringError::DuplicateRecord(_) => StatusCode::CONFLICT,

                // 422 Unprocessable Entity
                StringError::ConflictingFilters { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                StringError::UnsatisfiableQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,

                // 500 Internal Server Error
                StringError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            status: "error",
            message: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
