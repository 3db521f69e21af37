// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the one-shot training job in order:
//
//   Step 1: Load the reference dataset    (Layer 4 - data)
//   Step 2: Seeded 80/20 train/test split (Layer 4 - data)
//   Step 3: Fit ridge regression          (Layer 5 - ml)
//   Step 4: Score the held-out rows       (Layer 6 - infra)
//   Step 5: Write <output_dir>/model.pkl  (Layer 6 - infra)
//
// Any failure aborts the run; there are no retries and no
// partial-artifact guarantees.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{dataset::RegressionDataset, loader::DiabetesLoader, splitter::split_train_test};
use crate::domain::traits::{DatasetSource, Regressor};
use crate::infra::{checkpoint::ModelStore, metrics::RegressionMetrics};
use crate::ml::trainer::RidgeTrainer;

// ─── Training Configuration ──────────────────────────────────────────────────
// All knobs for a training run. The defaults reproduce the
// reference job: alpha = 1.0, 20% held out, seed 42, written
// to model/model.pkl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub output_dir: String,
    pub alpha:      f64,
    pub test_size:  f64,
    pub seed:       u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            output_dir: "model".to_string(),
            alpha:      1.0,
            test_size:  0.2,
            seed:       42,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.is_empty() {
            bail!("output directory must not be empty");
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            bail!("alpha must be a finite, non-negative number, got {}", self.alpha);
        }
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            bail!("test size must lie strictly between 0 and 1, got {}", self.test_size);
        }
        Ok(())
    }
}

/// What a finished training run produced.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub model_path: PathBuf,
    pub train_rows: usize,
    pub test_rows:  usize,
    pub metrics:    RegressionMetrics,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
    source: Box<dyn DatasetSource>,
}

impl TrainUseCase {
    /// Train on the bundled diabetes dataset.
    pub fn new(config: TrainConfig) -> Self {
        Self::with_source(config, Box::new(DiabetesLoader::new()))
    }

    /// Train on any other dataset source.
    pub fn with_source(config: TrainConfig, source: Box<dyn DatasetSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainReport> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1: Load dataset ──────────────────────────────────────────────
        let dataset = self.source.load()?;
        tracing::info!(
            "Loaded dataset: {} rows, {} features",
            dataset.n_rows(),
            dataset.n_features()
        );

        // ── Step 2: Train / test split ────────────────────────────────────────
        // Shuffle row indices, not rows, then gather each side
        let indices: Vec<usize> = (0..dataset.n_rows()).collect();
        let (train_idx, test_idx) = split_train_test(indices, cfg.test_size, cfg.seed)?;
        let train = dataset.select(&train_idx);
        let test  = dataset.select(&test_idx);
        tracing::info!("Split: {} train, {} test", train.n_rows(), test.n_rows());

        // ── Step 3: Fit ───────────────────────────────────────────────────────
        let trainer = RidgeTrainer::new(cfg.alpha)?;
        let model   = trainer.fit(&train)?;
        tracing::info!("Fitted ridge model (alpha={})", trainer.alpha());

        // ── Step 4: Held-out evaluation ───────────────────────────────────────
        let metrics = evaluate(&model, &test)?;
        metrics.log("test");

        // ── Step 5: Persist ───────────────────────────────────────────────────
        let store      = ModelStore::new(&cfg.output_dir);
        let model_path = store.save_model(&model)?;

        Ok(TrainReport {
            model_path,
            train_rows: train.n_rows(),
            test_rows:  test.n_rows(),
            metrics,
        })
    }
}

fn evaluate(model: &impl Regressor, test: &RegressionDataset) -> Result<RegressionMetrics> {
    let preds = model.predict(test.features().view())?;
    RegressionMetrics::evaluate(test.targets(), &preds)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};

    /// y = 10 + x0 - 2·x1 on a small grid
    struct GridSource;

    impl DatasetSource for GridSource {
        fn load(&self) -> Result<RegressionDataset> {
            let x = Array2::from_shape_fn((20, 2), |(i, j)| (i * (j + 1) % 7) as f64);
            let y: Array1<f64> = x.rows().into_iter().map(|r| 10.0 + r[0] - 2.0 * r[1]).collect();
            RegressionDataset::new(x, y)
        }
    }

    fn config_in(dir: &std::path::Path) -> TrainConfig {
        TrainConfig {
            output_dir: dir.join("model").to_string_lossy().into_owned(),
            ..TrainConfig::default()
        }
    }

    #[test]
    fn test_default_config_matches_reference_job() {
        let cfg = TrainConfig::default();
        assert_eq!(cfg.output_dir, "model");
        assert_eq!(cfg.alpha, 1.0);
        assert_eq!(cfg.test_size, 0.2);
        assert_eq!(cfg.seed, 42);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_alpha = TrainConfig { alpha: -0.5, ..TrainConfig::default() };
        let bad_split = TrainConfig { test_size: 1.5, ..TrainConfig::default() };
        let no_dir    = TrainConfig { output_dir: String::new(), ..TrainConfig::default() };
        assert!(bad_alpha.validate().is_err());
        assert!(bad_split.validate().is_err());
        assert!(no_dir.validate().is_err());
    }

    #[test]
    fn test_execute_with_injected_source() {
        let tmp    = tempfile::tempdir().unwrap();
        let report = TrainUseCase::with_source(config_in(tmp.path()), Box::new(GridSource))
            .execute()
            .unwrap();

        assert_eq!(report.test_rows,  4);
        assert_eq!(report.train_rows, 16);
        assert!(report.model_path.ends_with("model/model.pkl"));
        assert!(report.model_path.is_file());
        assert!(report.metrics.r2 > 0.9);
    }

    #[test]
    fn test_execute_on_diabetes() {
        let tmp    = tempfile::tempdir().unwrap();
        let report = TrainUseCase::new(config_in(tmp.path())).execute().unwrap();

        assert_eq!(report.train_rows, 353);
        assert_eq!(report.test_rows,  89);
        assert!(report.metrics.mse.is_finite());

        let model = ModelStore::new(tmp.path().join("model")).load_model().unwrap();
        assert_eq!(model.n_features(), 10);
        assert_eq!(model.alpha, 1.0);
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = TrainConfig { alpha: f64::NAN, ..config_in(tmp.path()) };
        assert!(TrainUseCase::new(cfg).execute().is_err());
        assert!(!tmp.path().join("model").exists());
    }
}
