//! Login endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use crate::dto::{LoginRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /login`: exchanges a credential pair for a bearer token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let token = state.auth.issue(&req.username, &req.password).map_err(|e| {
        warn!(username = %req.username, "login rejected");
        AppError::from(e)
    })?;

    info!(username = %req.username, "issued access token");
    Ok(Json(TokenResponse::bearer(token)))
}
