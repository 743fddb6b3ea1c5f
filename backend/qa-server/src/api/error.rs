//! REST API error types
//!
//! Every failure is mapped to one of three client-visible kinds before
//! it leaves the server: duplicate account, invalid credentials, or a
//! generic server error. Responses carry a short `{"message"}` body and
//! nothing else - internals stay in the server log.

use qa_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registration against an email already on file (400)
    #[error("Duplicate account {location}")]
    DuplicateAccount { location: ErrorLocation },

    /// Login lookup miss or password mismatch (400). The client cannot
    /// tell which.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Request input rejected (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
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

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::DuplicateAccount { .. } => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            ApiError::InvalidCredentials { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            // Never leak internal details to clients
            ApiError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}

/// Convert auth service errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::DuplicateAccount { .. } => ApiError::DuplicateAccount {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidCredentials { .. } => ApiError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Validation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Hash { .. } | AuthError::Db { .. } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
