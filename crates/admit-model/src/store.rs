//! Directory-backed model registry.
//!
//! Layout: `<root>/<name>/<tag>.json`, one JSON artifact per version, with
//! `<root>/<name>/latest` holding the tag most recently saved. The serving
//! process loads `name:latest` once at startup; training runs append new
//! tags and repoint `latest`.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::artifact::ModelArtifact;

/// Tag alias resolving to the most recently saved version.
pub const LATEST: &str = "latest";

/// Errors from model store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Model store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model not found: {name}:{tag}")]
    NotFound { name: String, tag: String },
}

/// File-backed store of versioned model artifacts.
pub struct ModelStore {
    root: PathBuf,
}

impl ModelStore {
    /// Opens a store rooted at `root`. The directory is created lazily on
    /// first save.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Saves an artifact under its tag and repoints `latest` at it.
    ///
    /// Returns the tag written.
    pub fn save(&self, artifact: &ModelArtifact) -> Result<String, StoreError> {
        let dir = self.root.join(&artifact.name);
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.json", artifact.tag));
        fs::write(&path, serde_json::to_string_pretty(artifact)?)?;
        fs::write(dir.join(LATEST), &artifact.tag)?;

        debug!(name = %artifact.name, tag = %artifact.tag, "saved model artifact");
        Ok(artifact.tag.clone())
    }

    /// Loads `name:tag`; `tag` may be [`LATEST`].
    pub fn load(&self, name: &str, tag: &str) -> Result<ModelArtifact, StoreError> {
        let dir = self.root.join(name);

        let tag = if tag == LATEST {
            match fs::read_to_string(dir.join(LATEST)) {
                Ok(pointer) => pointer.trim().to_string(),
                Err(_) => {
                    return Err(StoreError::NotFound {
                        name: name.to_string(),
                        tag: LATEST.to_string(),
                    })
                }
            }
        } else {
            tag.to_string()
        };

        let path = dir.join(format!("{tag}.json"));
        if !path.exists() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
                tag,
            });
        }

        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::LinearModel;

    fn artifact(tag: &str, intercept: f64) -> ModelArtifact {
        ModelArtifact {
            name: "admissions".to_string(),
            tag: tag.to_string(),
            feature_names: vec!["a".to_string(), "b".to_string()],
            weights: vec![0.1, 0.2],
            intercept,
            trained_at: "2024-01-01T00:00:00+00:00".to_string(),
            evaluation: None,
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::open(dir.path());

        let tag = store.save(&artifact("20240101000000", 0.5)).unwrap();
        assert_eq!(tag, "20240101000000");

        let loaded = store.load("admissions", "20240101000000").unwrap();
        assert_eq!(loaded.intercept, 0.5);

        let model = loaded.into_model().unwrap();
        assert_eq!(model, LinearModel::new(vec![0.1, 0.2], 0.5));
    }

    #[test]
    fn test_latest_points_at_most_recent_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::open(dir.path());

        store.save(&artifact("20240101000000", 0.1)).unwrap();
        store.save(&artifact("20240201000000", 0.2)).unwrap();

        let loaded = store.load("admissions", LATEST).unwrap();
        assert_eq!(loaded.tag, "20240201000000");
        assert_eq!(loaded.intercept, 0.2);
    }

    #[test]
    fn test_unknown_model_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::open(dir.path());

        match store.load("nonexistent", LATEST) {
            Err(StoreError::NotFound { name, tag }) => {
                assert_eq!(name, "nonexistent");
                assert_eq!(tag, LATEST);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tag_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::open(dir.path());
        store.save(&artifact("20240101000000", 0.1)).unwrap();

        match store.load("admissions", "20990101000000") {
            Err(StoreError::NotFound { tag, .. }) => assert_eq!(tag, "20990101000000"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
