//! Response types for the shift schedule API.
//!
//! This module defines the error response structures and the mapping from
//! [`ScheduleError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ScheduleError> for ApiErrorResponse {
    fn from(error: ScheduleError) -> Self {
        let message = error.to_string();
        let (status, code) = match error {
            ScheduleError::InvalidFormat { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_FORMAT")
            }
            ScheduleError::OutOfRange { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "OUT_OF_RANGE"),
            ScheduleError::CapacityExceeded { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "CAPACITY_EXCEEDED")
            }
            ScheduleError::InvalidState { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_STATE")
            }
            ScheduleError::ConfigNotFound { .. } | ScheduleError::ConfigParseError { .. } => {
                return ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                };
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}
