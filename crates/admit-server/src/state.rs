//! Shared application state.

use admit_auth::AuthGate;
use admit_core::FEATURE_COLUMNS;
use admit_model::{LinearModel, ModelArtifact};

/// State shared by all request handlers.
///
/// Both members are read-only for the process lifetime, so the state is
/// safe for any number of concurrent requests without locking.
pub struct AppState {
    pub auth: AuthGate,
    pub model: LinearModel,
}

impl AppState {
    /// Builds state from a loaded artifact.
    ///
    /// The artifact must have been trained with exactly the
    /// [`FEATURE_COLUMNS`] order; anything else would silently misorder
    /// features at inference time, so it refuses to serve instead.
    pub fn from_artifact(auth: AuthGate, artifact: ModelArtifact) -> anyhow::Result<Self> {
        if artifact.feature_names != FEATURE_COLUMNS {
            anyhow::bail!(
                "model {}:{} was trained with columns {:?}, expected {:?}",
                artifact.name,
                artifact.tag,
                artifact.feature_names,
                FEATURE_COLUMNS
            );
        }

        let model = artifact.into_model()?;
        Ok(Self { auth, model })
    }
}
