// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Wraps a fitted model and turns JSON-shaped rows into
// predictions.
//
//   Vec<Vec<f64>>  ──rows_to_matrix──►  Array2<f64>  ──predict──►  Vec<f64>
//
// rows_to_matrix enforces a rectangular, non-empty input; the
// model itself enforces the feature count.
use anyhow::{bail, Result};
use ndarray::Array2;

use crate::domain::traits::Regressor;
use crate::ml::model::RidgeModel;

pub struct Inferencer<M: Regressor = RidgeModel> {
    model: M,
}

impl<M: Regressor> Inferencer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Predict one value per input row.
    pub fn predict_rows(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        let features = rows_to_matrix(rows)?;
        let preds    = self.model.predict(features.view())?;

        tracing::debug!("Scored {} rows", preds.len());
        Ok(preds.to_vec())
    }
}

/// Pack nested rows into a dense row-major matrix.
///
/// Fails on zero rows or when any row length differs from the
/// first row.
pub fn rows_to_matrix(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let Some(first) = rows.first() else {
        bail!("expected a 2D array with at least one row, got an empty array");
    };
    let n_cols = first.len();

    for (i, row) in rows.iter().enumerate() {
        if row.len() != n_cols {
            bail!(
                "inhomogeneous shape: row {} has {} values, expected {}",
                i,
                row.len(),
                n_cols
            );
        }
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(Array2::from_shape_vec((rows.len(), n_cols), flat)?)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn inferencer() -> Inferencer {
        Inferencer::new(RidgeModel::new(1.0, 1.0, array![1.0, 1.0, 1.0]))
    }

    #[test]
    fn test_rows_to_matrix_shape() {
        let m = rows_to_matrix(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.dim(), (3, 2));
        assert_eq!(m[[2, 1]], 6.0);
    }

    #[test]
    fn test_rows_to_matrix_rejects_ragged() {
        let err = rows_to_matrix(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.to_string().contains("inhomogeneous"));
    }

    #[test]
    fn test_rows_to_matrix_rejects_empty() {
        assert!(rows_to_matrix(&[]).is_err());
    }

    #[test]
    fn test_predict_rows_one_value_per_row() {
        let rows  = vec![vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0]];
        let preds = inferencer().predict_rows(&rows).unwrap();
        assert_eq!(preds, vec![7.0, 1.0]);
    }

    #[test]
    fn test_predict_rows_zero_features() {
        assert!(inferencer().predict_rows(&[vec![]]).is_err());
    }
}
