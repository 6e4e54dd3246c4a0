//! Unified error types for the Todo API
//!
//! - `DomainError`: errors raised by repositories and the domain layer
//! - `AppError`: errors returned by handlers (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(DomainError::NotFound(msg)) | AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        }
    }

    /// HTTP status this error maps to
    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.parts().0
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::Domain(DomainError::NotFound("todo 4".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::NotFound("todo 4".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn bad_request_maps_to_400() {
        assert_eq!(
            AppError::BadRequest("empty body".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn storage_failures_map_to_500() {
        assert_eq!(
            AppError::from(DomainError::Database("connection refused".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(DomainError::Internal("lock poisoned".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_error_display_passes_through() {
        let err = AppError::from(DomainError::NotFound("Todo 3".to_string()));
        assert_eq!(err.to_string(), "Entity not found: Todo 3");
    }
}
