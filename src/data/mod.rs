// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the bundled reference dataset and the
// matrices handed to the trainer.
//
// The pipeline flows in this order:
//
//   linfa-datasets (diabetes)
//       │
//       ▼
//   DiabetesLoader     → reads features + targets into ndarray
//       │
//       ▼
//   RegressionDataset  → validated (X, y) pair with row selection
//       │
//       ▼
//   split_train_test   → seeded shuffle, 80/20 partition
//
// Reference: ndarray crate documentation
//            rand crate documentation

/// Loads the bundled diabetes dataset
pub mod loader;

/// Feature matrix + target vector container
pub mod dataset;

/// Shuffles and splits rows into train/test sets
pub mod splitter;
