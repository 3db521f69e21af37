// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in a specific
// business layer:
//
//   checkpoint.rs — Model artifact persistence
//                   Writes the fitted RidgeModel as JSON to
//                   <dir>/model.pkl and reads it back. Also
//                   resolves the model directory from the
//                   AZUREML_MODEL_DIR environment variable.
//
//   metrics.rs    — Held-out evaluation metrics
//                   MSE, MAE, and R² on the test split, logged
//                   through tracing after training.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// Model artifact saving and loading
pub mod checkpoint;

/// Regression metrics on held-out rows
pub mod metrics;
