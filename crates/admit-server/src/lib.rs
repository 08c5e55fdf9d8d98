//! HTTP service for the admissions prediction model.
//!
//! Two endpoints with actual logic, `POST /login` (credentials for a
//! bearer token) and `POST /predict` (token-gated inference), plus a
//! liveness probe. All auth and validation failures are converted to
//! generic status-mapped error bodies at this boundary.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the service router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health))
        .with_state(state)
}
