//! Regression model support for the admissions service.
//!
//! Everything around the trained artifact lives here:
//!
//! - [`LinearModel`] — the runtime model (weights + intercept)
//! - [`ModelArtifact`] — the stable on-disk schema
//! - [`ModelStore`] — the directory-backed registry the server loads from
//! - [`Dataset`] — CSV loading and train/test splitting
//! - [`fit`] / [`evaluate`] — training and held-out evaluation

pub mod artifact;
pub mod dataset;
pub mod linear;
pub mod metrics;
pub mod store;
pub mod train;

pub use artifact::{ArtifactError, ModelArtifact};
pub use dataset::{Dataset, DatasetError};
pub use linear::LinearModel;
pub use metrics::{evaluate, EvalReport};
pub use store::{ModelStore, StoreError};
pub use train::{fit, TrainConfig};
