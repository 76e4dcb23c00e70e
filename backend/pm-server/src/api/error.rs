//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use pm_core::CoreError;
use pm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Migration { message, .. } => ApiError::Internal {
                message: format!("Database migration error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Initialization { .. } => ApiError::Internal {
                message: "Stored project is unreadable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Domain errors are always the caller's fault
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidProjectStatus { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid status: {}. Valid values: ACTIVE, INACTIVE, COMPLETED, ONHOLD",
                    value
                ),
                field: Some("status".to_string()),
                location,
            },
            CoreError::InvalidProjectId { value, .. } => ApiError::Validation {
                message: format!("Invalid project id: {}", value),
                field: Some("projectId".to_string()),
                location,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(e: PathRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
