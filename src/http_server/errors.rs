//! # REST errors
//!
//! Maps catalog outcomes and extraction failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::observability::{log_event_with_fields, Event};

/// Result type for HTTP handlers
pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body missing, not JSON, or not the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Rejected by catalog validation
    #[error("{0}")]
    InvalidRequest(String),

    /// Unknown or unparsable id
    #[error("Resource not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for RestError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidRequest(reason) => RestError::InvalidRequest(reason),
            CatalogError::NotFound => RestError::NotFound,
            CatalogError::Storage(source) => {
                log_event_with_fields(
                    Event::StorageFailure,
                    &[("code", source.code()), ("error", &source.to_string())],
                );
                RestError::Internal(source.to_string())
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::BAD_REQUEST {
            log_event_with_fields(Event::RequestRejected, &[("reason", &self.to_string())]);
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
