//! Stable serialization schema for trained models.
//!
//! [`ModelArtifact`] is what the store persists and the server loads. It is
//! kept separate from the runtime [`LinearModel`] so the on-disk format can
//! evolve without touching inference code, and so loading can validate
//! shape before a model is ever served.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::linear::LinearModel;
use crate::metrics::EvalReport;

/// Errors from artifact validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("{weights} weights don't match {features} feature names")]
    Shape { weights: usize, features: usize },
}

/// Persisted form of a trained model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model name in the store.
    pub name: String,
    /// Version tag assigned at training time.
    pub tag: String,
    /// Feature names in training column order.
    pub feature_names: Vec<String>,
    /// One weight per feature, same order as `feature_names`.
    pub weights: Vec<f64>,
    /// Intercept term.
    pub intercept: f64,
    /// RFC 3339 timestamp of the training run.
    pub trained_at: String,
    /// Held-out evaluation report from the training run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvalReport>,
}

impl ModelArtifact {
    /// Packages a freshly trained model, stamping the tag and timestamp.
    pub fn new(
        name: impl Into<String>,
        feature_names: Vec<String>,
        model: &LinearModel,
        evaluation: Option<EvalReport>,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            tag: now.format("%Y%m%d%H%M%S").to_string(),
            feature_names,
            weights: model.weights().to_vec(),
            intercept: model.intercept(),
            trained_at: now.to_rfc3339(),
            evaluation,
        }
    }

    /// Validates shape and converts into the runtime model.
    pub fn into_model(self) -> Result<LinearModel, ArtifactError> {
        if self.weights.len() != self.feature_names.len() {
            return Err(ArtifactError::Shape {
                weights: self.weights.len(),
                features: self.feature_names.len(),
            });
        }
        Ok(LinearModel::new(self.weights, self.intercept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_captures_model() {
        let model = LinearModel::new(vec![0.1, 0.2], 0.5);
        let artifact = ModelArtifact::new(
            "admissions",
            vec!["a".to_string(), "b".to_string()],
            &model,
            None,
        );

        assert_eq!(artifact.name, "admissions");
        assert_eq!(artifact.weights, vec![0.1, 0.2]);
        assert_eq!(artifact.intercept, 0.5);
        assert!(!artifact.tag.is_empty());

        let restored = artifact.into_model().unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn test_into_model_rejects_shape_mismatch() {
        let artifact = ModelArtifact {
            name: "admissions".to_string(),
            tag: "t".to_string(),
            feature_names: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            weights: vec![0.1, 0.2],
            intercept: 0.0,
            trained_at: "2024-01-01T00:00:00+00:00".to_string(),
            evaluation: None,
        };

        assert_eq!(
            artifact.into_model(),
            Err(ArtifactError::Shape { weights: 2, features: 3 })
        );
    }
}
