//! Linear model fitting.
//!
//! Cyclic coordinate descent on the squared loss with incremental residual
//! updates: each coordinate step solves its one-dimensional problem
//! exactly, so there is no learning rate to tune at this scale. A small L2
//! term keeps near-collinear features conditioned.

use tracing::debug;

use crate::dataset::Dataset;
use crate::linear::LinearModel;

/// Training knobs.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Maximum full passes over the features.
    pub rounds: usize,
    /// L2 regularization strength.
    pub lambda: f64,
    /// Stop once no coordinate moved more than this in a round.
    pub tolerance: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            rounds: 500,
            lambda: 1e-6,
            tolerance: 1e-12,
        }
    }
}

/// Fits per-feature weights and an intercept to the dataset.
pub fn fit(data: &Dataset, config: &TrainConfig) -> LinearModel {
    let n_features = data.feature_names.len();
    let n_rows = data.len();
    if n_rows == 0 {
        return LinearModel::new(vec![0.0; n_features], 0.0);
    }

    let mut weights = vec![0.0; n_features];

    // start from the mean target and keep residuals current from there
    let mut intercept = data.targets.iter().sum::<f64>() / n_rows as f64;
    let mut residuals: Vec<f64> = data.targets.iter().map(|t| t - intercept).collect();

    let norms: Vec<f64> = (0..n_features)
        .map(|j| data.rows.iter().map(|row| row[j] * row[j]).sum::<f64>())
        .collect();

    for round in 0..config.rounds {
        let mut max_step = 0.0f64;

        for j in 0..n_features {
            if norms[j] == 0.0 {
                continue;
            }

            let gradient: f64 = data
                .rows
                .iter()
                .zip(&residuals)
                .map(|(row, r)| row[j] * r)
                .sum();
            let delta = gradient / (norms[j] + config.lambda);
            if delta == 0.0 {
                continue;
            }

            weights[j] += delta;
            for (row, r) in data.rows.iter().zip(residuals.iter_mut()) {
                *r -= delta * row[j];
            }
            max_step = max_step.max(delta.abs());
        }

        // re-center the intercept against the current residuals
        let shift = residuals.iter().sum::<f64>() / n_rows as f64;
        if shift != 0.0 {
            intercept += shift;
            for r in residuals.iter_mut() {
                *r -= shift;
            }
        }
        max_step = max_step.max(shift.abs());

        if max_step < config.tolerance {
            debug!(rounds = round + 1, "training converged");
            break;
        }
    }

    LinearModel::new(weights, intercept)
}
