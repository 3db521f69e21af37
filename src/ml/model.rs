use anyhow::{bail, Result};
use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::domain::traits::Regressor;

/// Fitted ridge regression parameters.
///
/// prediction(x) = intercept + Σ coefficients[j] · x[j]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeModel {
    /// L2 regularisation strength used during fitting
    pub alpha:        f64,
    pub intercept:    f64,
    /// One weight per input feature
    pub coefficients: Array1<f64>,
}

impl RidgeModel {
    pub fn new(alpha: f64, intercept: f64, coefficients: Array1<f64>) -> Self {
        Self { alpha, intercept, coefficients }
    }

    /// Reject artifacts whose parameters could never produce a finite
    /// prediction.
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            bail!("model has no coefficients");
        }
        if !self.intercept.is_finite() || !self.coefficients.iter().all(|c| c.is_finite()) {
            bail!("model parameters contain non-finite values");
        }
        Ok(())
    }
}

impl Regressor for RidgeModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let (n_rows, n_cols) = features.dim();

        if n_rows == 0 {
            bail!("found array with 0 sample(s), a minimum of 1 is required");
        }
        if n_cols == 0 {
            bail!("found array with 0 feature(s), a minimum of 1 is required");
        }
        if n_cols != self.n_features() {
            bail!(
                "X has {} features, but the model expects {} features as input",
                n_cols,
                self.n_features()
            );
        }
        if !features.iter().all(|v| v.is_finite()) {
            bail!("input contains NaN or infinity");
        }

        let preds = features.dot(&self.coefficients) + self.intercept;
        if !preds.iter().all(|p| p.is_finite()) {
            bail!("prediction overflowed to a non-finite value");
        }
        Ok(preds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn toy_model() -> RidgeModel {
        RidgeModel::new(1.0, 0.5, array![2.0, -1.0])
    }

    #[test]
    fn test_predict_is_affine() {
        let x     = array![[1.0, 1.0], [0.0, 2.0]];
        let preds = toy_model().predict(x.view()).unwrap();
        assert_eq!(preds, array![1.5, -1.5]);
    }

    #[test]
    fn test_predict_rejects_wrong_feature_count() {
        let x   = array![[1.0, 2.0, 3.0]];
        let err = toy_model().predict(x.view()).unwrap_err();
        assert!(err.to_string().contains("X has 3 features"));
    }

    #[test]
    fn test_predict_rejects_non_finite() {
        let x = array![[f64::NAN, 1.0]];
        assert!(toy_model().predict(x.view()).is_err());
    }

    #[test]
    fn test_predict_rejects_overflowing_output() {
        // Finite inputs whose weighted sum exceeds f64::MAX
        let x = array![[1e308, -1e308]];
        let err = toy_model().predict(x.view()).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_validate_catches_empty_and_nan() {
        assert!(toy_model().validate().is_ok());
        assert!(RidgeModel::new(1.0, 0.0, Array1::zeros(0)).validate().is_err());
        assert!(RidgeModel::new(1.0, f64::NAN, array![1.0]).validate().is_err());
    }
}
