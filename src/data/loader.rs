// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Loads the diabetes reference dataset bundled with the
// linfa-datasets crate (`diabetes` feature).
//
// Shape of the data:
//   442 patients × 10 baseline features
//   (age, sex, bmi, bp, s1..s6), already mean-centred and
//   scaled, plus one continuous target: disease progression
//   one year after baseline.
//
// The dataset is compiled into the binary, so loading it never
// touches the filesystem.
//
// Reference: linfa-datasets crate documentation

use anyhow::{bail, Result};

use crate::data::dataset::RegressionDataset;
use crate::domain::traits::DatasetSource;

/// Number of feature columns in the diabetes dataset
pub const DIABETES_FEATURES: usize = 10;

/// Loads the bundled diabetes dataset.
/// Implements the DatasetSource trait from Layer 3.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiabetesLoader;

impl DiabetesLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSource for DiabetesLoader {
    fn load(&self) -> Result<RegressionDataset> {
        let raw = linfa_datasets::diabetes();
        let dataset = RegressionDataset::new(raw.records, raw.targets)?;

        if dataset.n_features() != DIABETES_FEATURES {
            bail!(
                "diabetes dataset has {} features, expected {}",
                dataset.n_features(),
                DIABETES_FEATURES
            );
        }

        tracing::debug!(
            "Loaded diabetes dataset: {} rows × {} features",
            dataset.n_rows(),
            dataset.n_features()
        );
        Ok(dataset)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diabetes_shape() {
        let ds = DiabetesLoader::new().load().unwrap();
        assert_eq!(ds.n_rows(), 442);
        assert_eq!(ds.n_features(), DIABETES_FEATURES);
    }

    #[test]
    fn test_features_are_scaled() {
        // Every column is centred and scaled, so no value strays far from 0
        let ds = DiabetesLoader::new().load().unwrap();
        assert!(ds.features().iter().all(|v| v.abs() < 1.0));
        assert!(ds.targets().iter().all(|v| *v > 0.0));
    }
}
