//! Auth REST API handlers
//!
//! The two operations of the credential core. Each service call runs
//! under the configured handler timeout; a hung store call surfaces as
//! a 500 rather than a hung response.

use crate::state::AppState;
use crate::{ApiError, ApiResult, AuthResponse, LoginRequest, RegisterRequest};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;
use tokio::time::timeout;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/register
///
/// Create a new account and return the sanitized identity
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let user = timeout(
        state.handler_timeout,
        state.auth.register(&req.username, &req.email, &req.password),
    )
    .await
    .map_err(|_| ApiError::Internal {
        message: "register timed out".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })??;

    Ok((StatusCode::CREATED, Json(AuthResponse { user: user.into() })))
}

/// POST /api/auth/login
///
/// Verify credentials and return the sanitized identity
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = timeout(
        state.handler_timeout,
        state.auth.login(&req.email, &req.password),
    )
    .await
    .map_err(|_| ApiError::Internal {
        message: "login timed out".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })??;

    Ok(Json(AuthResponse { user: user.into() }))
}
