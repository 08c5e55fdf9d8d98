//! Request extractors.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::warn;

use admit_auth::AuthError;

use crate::error::AppError;
use crate::state::AppState;

/// Verified caller identity.
///
/// Extracting `Identity` runs bearer-token verification before the handler
/// body executes; handlers taking this parameter never check auth
/// themselves. Extractor parameters run in declaration order, so listing
/// `Identity` before the JSON body makes a bad token win over a bad
/// payload.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The authenticated username.
    pub subject: String,
}

impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                warn!("missing or non-bearer authorization header");
                AppError::Unauthorized("Authentication failed".to_string())
            })?;

        match state.auth.verify(token) {
            Ok(subject) => Ok(Identity { subject }),
            Err(e) => {
                if let AuthError::Unauthenticated(cause) = &e {
                    warn!(?cause, "token verification failed");
                }
                Err(e.into())
            }
        }
    }
}
