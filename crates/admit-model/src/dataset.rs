//! CSV loading and train/test splitting.
//!
//! Column names are normalized to the wire form (trimmed, spaces replaced
//! with underscores) so datasets, artifacts, and request fields all agree
//! on feature naming. A leading row-number column (`Serial No.`) is
//! dropped; rows with missing or non-numeric values are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::prelude::*;
use thiserror::Error;
use tracing::warn;

/// Row-number column dropped on load (normalized name).
const SERIAL_COLUMN: &str = "Serial_No.";

/// Errors from dataset loading.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset has no header row")]
    MissingHeader,

    #[error("Target column not found: {0}")]
    MissingTarget(String),

    #[error("Dataset has no usable rows")]
    Empty,
}

/// In-memory tabular dataset: row-major features plus a target column.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature column names, in file order, normalized.
    pub feature_names: Vec<String>,
    /// One feature vector per row, in `feature_names` order.
    pub rows: Vec<Vec<f64>>,
    /// Target value per row.
    pub targets: Vec<f64>,
}

impl Dataset {
    /// Loads a CSV with a header row, taking `target_column` (normalized
    /// name) as the target and every remaining column as a feature.
    pub fn load_csv(path: impl AsRef<Path>, target_column: &str) -> Result<Self, DatasetError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(DatasetError::MissingHeader),
        };
        let columns: Vec<String> = header.split(',').map(normalize).collect();

        let serial_idx = columns.iter().position(|c| c == SERIAL_COLUMN);
        let target_idx = columns
            .iter()
            .position(|c| c == target_column)
            .ok_or_else(|| DatasetError::MissingTarget(target_column.to_string()))?;

        let feature_names: Vec<String> = columns
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != serial_idx && *i != target_idx)
            .map(|(_, c)| c.clone())
            .collect();

        let mut rows = Vec::new();
        let mut targets = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != columns.len() {
                skipped += 1;
                continue;
            }

            let mut features = Vec::with_capacity(feature_names.len());
            let mut target = None;
            let mut bad = false;
            for (i, field) in fields.iter().enumerate() {
                if Some(i) == serial_idx {
                    continue;
                }
                match field.trim().parse::<f64>() {
                    Ok(value) if i == target_idx => target = Some(value),
                    Ok(value) => features.push(value),
                    Err(_) => {
                        bad = true;
                        break;
                    }
                }
            }

            match (bad, target) {
                (false, Some(target)) => {
                    rows.push(features);
                    targets.push(target);
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "dropped rows with missing or non-numeric values");
        }
        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self {
            feature_names,
            rows,
            targets,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits into `(train, test)` by seeded shuffle.
    ///
    /// The same seed always produces the same split.
    pub fn train_test_split(&self, test_fraction: f64, seed: u64) -> (Dataset, Dataset) {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_test = ((self.len() as f64) * test_fraction).round() as usize;
        let (test_idx, train_idx) = indices.split_at(n_test.min(self.len()));

        (self.subset(train_idx), self.subset(test_idx))
    }

    fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            feature_names: self.feature_names.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
            targets: indices.iter().map(|&i| self.targets[i]).collect(),
        }
    }
}

fn normalize(column: &str) -> String {
    column.trim().replace(' ', "_")
}
