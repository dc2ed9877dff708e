//! Unified error types for the Courses API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Course validation, business rule and persistence errors
//! - `PaginationError`: Page window calculation errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
///
/// Callers dispatch on the variant, never on the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("name is required")]
    NameRequired,

    #[error("start date is required")]
    StartDateRequired,

    #[error("end date is required")]
    EndDateRequired,

    #[error("start date must be lower than end date")]
    EndLesserThanStart,

    #[error("course '{course_id}' does not found")]
    CourseNotFound { course_id: String },

    #[error("invalid {field} '{value}': expected YYYY-MM-DD or RFC 3339")]
    InvalidDate { field: &'static str, value: String },

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn course_not_found(course_id: impl Into<String>) -> Self {
        DomainError::CourseNotFound {
            course_id: course_id.into(),
        }
    }

    /// Errors caused by the request contents rather than the system
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Database(_))
    }
}

/// Page window calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page must not be negative (got {0})")]
    NegativePage(i64),

    #[error("limit must not be negative (got {0})")]
    NegativeLimit(i64),

    #[error("default page limit must be positive (got {0})")]
    InvalidDefaultLimit(i64),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!(
            "invalid request format: '{}'",
            rejection.body_text()
        ))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("invalid query: '{}'", rejection.body_text()))
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::CourseNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Domain(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Pagination(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error, details) = match &self {
            AppError::Domain(DomainError::CourseNotFound { .. }) => {
                ("Not found", Some(self.to_string()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                ("Internal server error", None)
            }
            AppError::Domain(
                DomainError::NameRequired
                | DomainError::StartDateRequired
                | DomainError::EndDateRequired,
            ) => ("Validation error", Some(self.to_string())),
            AppError::Domain(_) => ("Bad request", Some(self.to_string())),
            AppError::Pagination(e) => {
                tracing::error!("Pagination error: {}", e);
                ("Internal server error", None)
            }
            AppError::BadRequest(msg) => ("Bad request", Some(msg.clone())),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal server error", None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
