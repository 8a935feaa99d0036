//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Authentication failures are
//! deliberately opaque: a wrong password, an unknown car id, and an
//! inactive identity all produce the same response, so the endpoint
//! cannot be used to probe which car ids exist.

use fleet_auth::AuthError;
use fleet_core::{CoreError, ErrorLocation};
use fleet_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
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
    /// Machine-readable error code (e.g., "CONFLICT", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this error is about a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Duplicate value on a unique field (400)
    #[error("Conflict on field '{field}' {location}")]
    Conflict {
        field: String,
        location: ErrorLocation,
    },

    /// Uniform credential rejection (400); never says what was wrong
    #[error("Authentication failed {location}")]
    AuthenticationFailed { location: ErrorLocation },

    /// Missing/invalid bearer token (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn authentication_failed() -> Self {
        Self::AuthenticationFailed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message: format!("An identity with this {} already exists", field),
                    field: Some(field),
                },
            ),
            ApiError::AuthenticationFailed { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "AUTHENTICATION_FAILED".into(),
                    message: "Unable to authenticate with the provided credentials".into(),
                    field: None,
                },
            ),
            ApiError::Unauthenticated { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHENTICATED".into(),
                    message: "Authentication credentials were not provided or are invalid".into(),
                    field: None,
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
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert core validation errors to field-level API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = e.field();
        let message = match &e {
            CoreError::MissingField { .. } => format!("Field '{}' is required", field),
            CoreError::InvalidEmail { value, .. } => {
                format!("Enter a valid email address: '{}'", value)
            }
            CoreError::InvalidPhone { value, .. } => {
                format!("Enter a valid phone number: '{}'", value)
            }
            CoreError::WeakPassword { min, .. } => {
                format!("Ensure the password has at least {} characters", min)
            }
        };

        ApiError::Validation {
            message,
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { column, .. } => ApiError::Conflict {
                field: column,
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert credential-plumbing errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingHeader { .. } | AuthError::InvalidScheme { .. } => {
                ApiError::Unauthenticated {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::Hash { .. } => {
                // Hash internals stay out of client responses
                log::error!("Credential error: {}", e);
                ApiError::Internal {
                    message: "Credential processing failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
