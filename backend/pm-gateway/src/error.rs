use crate::MAX_BODY_BYTES;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use http_body_util::LengthLimitError;
use serde::Serialize;
use thiserror::Error;

/// JSON error body, same envelope as the project service uses
#[derive(Debug, Serialize)]
pub struct GatewayErrorResponse {
    pub error: GatewayErrorBody,
}

#[derive(Debug, Serialize)]
pub struct GatewayErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// No route prefix matches the request path (404)
    #[error("No route for {path} {location}")]
    RouteNotFound {
        path: String,
        location: ErrorLocation,
    },

    /// Upstream refused the connection or broke the exchange (502)
    #[error("Upstream {upstream} failed: {source} {location}")]
    Upstream {
        upstream: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// Upstream did not answer within the configured timeout (504)
    #[error("Upstream {upstream} timed out {location}")]
    Timeout {
        upstream: String,
        location: ErrorLocation,
    },

    /// Request body could not be buffered (413)
    #[error("Request body rejected: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Request body stream failed before it was fully read (400)
    #[error("Request body unreadable: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// HTTP client could not be constructed at startup
    #[error("HTTP client error: {source} {location}")]
    Client {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn route_not_found(path: impl Into<String>) -> Self {
        Self::RouteNotFound {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a failed body read: only the size cap is a 413.
    #[track_caller]
    pub fn from_body(err: axum::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&err);
        while let Some(e) = source {
            if e.is::<LengthLimitError>() {
                return Self::PayloadTooLarge {
                    message: format!("Request body exceeds {} bytes", MAX_BODY_BYTES),
                    location,
                };
            }
            source = e.source();
        }

        Self::BadRequest {
            message: format!("Failed to read request body: {}", err),
            location,
        }
    }

    /// Classify a failed forward by what went wrong on the wire.
    #[track_caller]
    pub fn from_upstream(upstream: impl Into<String>, source: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_timeout() {
            Self::Timeout {
                upstream: upstream.into(),
                location,
            }
        } else {
            Self::Upstream {
                upstream: upstream.into(),
                source,
                location,
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        log::warn!("{}", self);

        let (status, code, message) = match self {
            GatewayError::RouteNotFound { path, .. } => (
                StatusCode::NOT_FOUND,
                "ROUTE_NOT_FOUND",
                format!("No route configured for {}", path),
            ),
            // Upstream internals stay in the log
            GatewayError::Upstream { upstream, .. } => (
                StatusCode::BAD_GATEWAY,
                "BAD_GATEWAY",
                format!("Upstream {} is unavailable", upstream),
            ),
            GatewayError::Timeout { upstream, .. } => (
                StatusCode::GATEWAY_TIMEOUT,
                "GATEWAY_TIMEOUT",
                format!("Upstream {} did not respond in time", upstream),
            ),
            GatewayError::PayloadTooLarge { message, .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", message)
            }
            GatewayError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
            GatewayError::Client { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Gateway is misconfigured".to_string(),
            ),
        };

        let body = GatewayErrorResponse {
            error: GatewayErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
