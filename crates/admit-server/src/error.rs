//! Application error types and Axum response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Application-level errors with HTTP status code mapping.
///
/// Messages reaching clients stay generic; whatever caused an auth or
/// internal failure is logged, never returned.
#[derive(Debug)]
pub enum AppError {
    /// Login mismatch or bad/expired/missing token. Maps to 401.
    Unauthorized(String),
    /// Request body failed validation. Maps to 400.
    BadRequest(String),
    /// Unexpected internal failure. Maps to 500.
    Internal(String),
}

impl From<admit_auth::AuthError> for AppError {
    fn from(e: admit_auth::AuthError) -> Self {
        use admit_auth::AuthError;
        match e {
            // Display for both auth variants is already a generic message
            AuthError::InvalidCredentials | AuthError::Unauthenticated(_) => {
                AppError::Unauthorized(e.to_string())
            }
            AuthError::TokenCreation => AppError::Internal(e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => {
                error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
