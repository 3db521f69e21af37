// ============================================================
// Layer 5 — Ridge Trainer
// ============================================================
// Fits ridge regression with an unpenalised intercept in
// closed form:
//
//   x̄, ȳ      = column means of X, mean of y
//   Xc, yc    = X - x̄, y - ȳ
//   (XcᵀXc + αI) w = Xcᵀ yc        ← solved by Cholesky
//   intercept = ȳ - x̄·w
//
// For α > 0 the system matrix is symmetric positive-definite,
// so the Cholesky factorisation always exists. For α = 0 it
// degenerates to ordinary least squares and fails on
// collinear features.
//
// Nothing here is random: the same rows in the same order
// always yield bit-identical coefficients.
//
// Reference: Hastie, Tibshirani & Friedman, ESL §3.4.1
//            Golub & Van Loan, Matrix Computations §4.2

use anyhow::{anyhow, bail, Result};
use ndarray::{Array1, Array2, Axis};

use crate::data::dataset::RegressionDataset;
use crate::ml::model::RidgeModel;

/// Ridge fitting hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct RidgeTrainer {
    alpha: f64,
}

impl RidgeTrainer {
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha < 0.0 {
            bail!("alpha must be a finite, non-negative number, got {alpha}");
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Fit the model on every row of `dataset`.
    pub fn fit(&self, dataset: &RegressionDataset) -> Result<RidgeModel> {
        let x = dataset.features();
        let y = dataset.targets();

        if dataset.n_rows() == 0 {
            bail!("cannot fit on an empty dataset");
        }
        if dataset.n_features() == 0 {
            bail!("cannot fit on a dataset with no features");
        }

        let x_mean = x
            .mean_axis(Axis(0))
            .ok_or_else(|| anyhow!("cannot compute feature means"))?;
        let y_mean = y
            .mean()
            .ok_or_else(|| anyhow!("cannot compute target mean"))?;

        let xc = x - &x_mean;
        let yc = y - y_mean;

        // Normal equations with the ridge penalty on the diagonal
        let mut gram = xc.t().dot(&xc);
        gram.diag_mut().map_inplace(|d| *d += self.alpha);
        let rhs = xc.t().dot(&yc);

        let coefficients = cholesky_solve(&gram, &rhs)?;
        let intercept    = y_mean - x_mean.dot(&coefficients);

        tracing::debug!(
            "Fitted ridge: alpha={}, intercept={:.4}, {} coefficients",
            self.alpha,
            intercept,
            coefficients.len()
        );

        Ok(RidgeModel::new(self.alpha, intercept, coefficients))
    }
}

/// Solve `a · x = b` for symmetric positive-definite `a`.
///
/// Factorises a = L·Lᵀ, then does forward substitution (L·z = b)
/// and back substitution (Lᵀ·x = z).
fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n {
        bail!("shape mismatch: {:?} system with {} right-hand side values", a.dim(), b.len());
    }

    let mut l = Array2::<f64>::zeros((n, n));
    for j in 0..n {
        let mut pivot = a[[j, j]];
        for k in 0..j {
            pivot -= l[[j, k]] * l[[j, k]];
        }
        // Relative tolerance catches pivots that are zero up to rounding
        if !(pivot > f64::EPSILON * a[[j, j]].abs() * n as f64) {
            bail!(
                "matrix is not positive-definite (pivot {pivot:e} at column {j}); \
                 features may be collinear, try a larger alpha"
            );
        }
        let diag = pivot.sqrt();
        l[[j, j]] = diag;

        for i in (j + 1)..n {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            l[[i, j]] = sum / diag;
        }
    }

    // L · z = b
    let mut z = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * z[k];
        }
        z[i] = sum / l[[i, i]];
    }

    // Lᵀ · x = z
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = z[i];
        for k in (i + 1)..n {
            sum -= l[[k, i]] * x[k];
        }
        x[i] = sum / l[[i, i]];
    }

    Ok(x)
}
