//! Regression evaluation metrics.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::linear::LinearModel;

/// Held-out evaluation report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Mean squared error.
    pub mse: f64,
    /// Root mean squared error.
    pub rmse: f64,
    /// Mean absolute error.
    pub mae: f64,
    /// Coefficient of determination.
    pub r2: f64,
}

/// Evaluates the model against a dataset's targets.
pub fn evaluate(model: &LinearModel, data: &Dataset) -> EvalReport {
    let n = data.len() as f64;
    if data.is_empty() {
        return EvalReport { mse: 0.0, rmse: 0.0, mae: 0.0, r2: 0.0 };
    }

    let mean = data.targets.iter().sum::<f64>() / n;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    let mut abs_sum = 0.0;
    for (row, &target) in data.rows.iter().zip(&data.targets) {
        let residual = model.predict(row) - target;
        ss_res += residual * residual;
        abs_sum += residual.abs();
        let centered = target - mean;
        ss_tot += centered * centered;
    }

    let mse = ss_res / n;
    EvalReport {
        mse,
        rmse: mse.sqrt(),
        mae: abs_sum / n,
        // constant targets leave r2 undefined; report 0 rather than NaN
        r2: if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 },
    }
}
