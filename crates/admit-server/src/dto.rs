//! Request/response types for the HTTP API.
//!
//! The predict request body is [`admit_core::Applicant`]; its wire names
//! are pinned there next to the column mapping.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub chance_of_admit: f64,
}
