//! Training pipeline: dataset → fit → evaluate → model store.
//!
//! Usage: `admit-train [data.csv]`. The CSV path may also come from
//! `ADMIT_DATA_PATH`; the store location and model name reuse the serving
//! variables `ADMIT_MODEL_DIR` / `ADMIT_MODEL_NAME`.

use std::env;
use std::path::PathBuf;

use admit_core::FEATURE_COLUMNS;
use admit_model::store::ModelStore;
use admit_model::{evaluate, fit, Dataset, ModelArtifact, TrainConfig};
use anyhow::{bail, Context, Result};
use tracing::{info, warn};

const TARGET_COLUMN: &str = "Chance_of_Admit";
const TEST_FRACTION: f64 = 0.2;
const SPLIT_SEED: u64 = 42;

/// Models scoring at or below this on the held-out split are not saved.
const R2_THRESHOLD: f64 = 0.7;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let data_path: PathBuf = env::args()
        .nth(1)
        .or_else(|| env::var("ADMIT_DATA_PATH").ok())
        .unwrap_or_else(|| "data/admission.csv".to_string())
        .into();
    let model_dir = env::var("ADMIT_MODEL_DIR").unwrap_or_else(|_| "models".to_string());
    let model_name = env::var("ADMIT_MODEL_NAME").unwrap_or_else(|_| "admissions".to_string());

    let data = Dataset::load_csv(&data_path, TARGET_COLUMN)
        .with_context(|| format!("loading {}", data_path.display()))?;
    info!(
        rows = data.len(),
        features = data.feature_names.len(),
        "loaded dataset"
    );

    if data.feature_names != FEATURE_COLUMNS {
        bail!(
            "dataset columns {:?} do not match the serving order {:?}",
            data.feature_names,
            FEATURE_COLUMNS
        );
    }

    let (train, test) = data.train_test_split(TEST_FRACTION, SPLIT_SEED);
    info!(train = train.len(), test = test.len(), "split dataset");

    let model = fit(&train, &TrainConfig::default());
    info!("model coefficients:");
    for (name, weight) in FEATURE_COLUMNS.iter().zip(model.weights()) {
        info!("  {name}: {weight:.4}");
    }
    info!("  intercept: {:.4}", model.intercept());

    let report = evaluate(&model, &test);
    info!("MSE:  {:.4}", report.mse);
    info!("RMSE: {:.4}", report.rmse);
    info!("MAE:  {:.4}", report.mae);
    info!("R²:   {:.4}", report.r2);

    if report.r2 <= R2_THRESHOLD {
        warn!(
            "R² {:.4} is at or below the {} threshold, not saving",
            report.r2, R2_THRESHOLD
        );
        return Ok(());
    }

    let artifact = ModelArtifact::new(
        model_name.clone(),
        data.feature_names.clone(),
        &model,
        Some(report),
    );
    let store = ModelStore::open(&model_dir);
    let tag = store.save(&artifact)?;
    info!(model = %model_name, %tag, dir = %model_dir, "saved model artifact");

    Ok(())
}
