//! Prediction endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use admit_core::Applicant;

use crate::dto::PredictResponse;
use crate::error::AppError;
use crate::extract::Identity;
use crate::state::AppState;

/// `POST /predict`: scores an applicant.
///
/// Token verification happens in the [`Identity`] extractor, before the
/// body is read. The model output is returned as-is, without clamping or
/// rounding.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    payload: Result<Json<Applicant>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(applicant) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let chance_of_admit = state.model.predict(&applicant.to_features());

    info!(subject = %identity.subject, chance_of_admit, "prediction served");
    Ok(Json(PredictResponse { chance_of_admit }))
}
