// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, so a
// different dataset or a different regressor can be plugged in
// without touching the use cases.
//
//   - DiabetesLoader implements DatasetSource
//   - RidgeModel     implements Regressor
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use ndarray::{Array1, ArrayView2};

use crate::data::dataset::RegressionDataset;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce a labelled regression dataset.
///
/// Implementations:
///   - DiabetesLoader → the bundled diabetes reference dataset
///   - (tests) in-memory synthetic datasets
pub trait DatasetSource {
    /// Load the full dataset (features + targets).
    fn load(&self) -> Result<RegressionDataset>;
}

// ─── Regressor ────────────────────────────────────────────────────────────────
/// A fitted model that maps feature rows to continuous predictions.
pub trait Regressor {
    /// Number of input features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predict one value per row of `features`.
    /// Fails if the column count does not match `n_features()`.
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>>;
}
