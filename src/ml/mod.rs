// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All numeric model code lives here. Other layers only see
// RidgeModel through the Regressor trait or as an opaque
// serialisable value.
//
// What's in this layer:
//
//   model.rs      — The fitted ridge model
//                   Coefficients, intercept, and the alpha it
//                   was fitted with, plus row-wise prediction
//
//   trainer.rs    — Closed-form ridge fitting
//                   Centres the data, builds XᵀX + αI, and
//                   solves it by Cholesky decomposition
//
//   inferencer.rs — The inference engine
//                   Turns JSON rows into a checked matrix and
//                   runs the model over it
//
// Reference: Hoerl & Kennard (1970) Ridge Regression
//            ndarray crate documentation

/// Fitted ridge regression model
pub mod model;

/// Closed-form ridge fitting
pub mod trainer;

/// Row conversion and prediction over a loaded model
pub mod inferencer;
