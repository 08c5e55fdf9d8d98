//! Linear regression model representation.

/// Linear regression model: one weight per feature plus an intercept.
///
/// Immutable once constructed and safe for unlimited concurrent readers;
/// prediction is a pure dot product.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Per-feature weights.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Intercept term.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predicted value for one feature vector.
    ///
    /// # Panics
    ///
    /// Panics if `features.len()` differs from [`n_features`](Self::n_features).
    pub fn predict(&self, features: &[f64]) -> f64 {
        assert_eq!(
            features.len(),
            self.weights.len(),
            "feature vector length {} doesn't match model with {} features",
            features.len(),
            self.weights.len()
        );

        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}
