use anyhow::{bail, Result};
use ndarray::{Array1, Array2, Axis};

/// A labelled regression dataset: one target per feature row.
#[derive(Debug, Clone)]
pub struct RegressionDataset {
    features: Array2<f64>,
    targets:  Array1<f64>,
}

impl RegressionDataset {
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self> {
        if features.nrows() != targets.len() {
            bail!(
                "Feature matrix has {} rows but target vector has {} values",
                features.nrows(),
                targets.len()
            );
        }
        Ok(Self { features, targets })
    }

    pub fn features(&self) -> &Array2<f64> { &self.features }

    pub fn targets(&self) -> &Array1<f64> { &self.targets }

    pub fn n_rows(&self) -> usize { self.features.nrows() }

    pub fn n_features(&self) -> usize { self.features.ncols() }

    /// Build a new dataset from the given row indices, in that order.
    pub fn select(&self, rows: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), rows),
            targets:  self.targets.select(Axis(0), rows),
        }
    }
}
