// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the fitted model artifact.
//
// What gets saved:
//   <dir>/model.pkl — the RidgeModel (alpha, intercept,
//                     coefficients) serialised as JSON
//
// The file keeps the `model.pkl` name that hosting runtimes
// look for; its contents are plain serde_json.
//
// Directory layout after `train`:
//   model/
//     model.pkl
//
// Where `score` looks:
//   $AZUREML_MODEL_DIR/model.pkl, or ./model.pkl when unset
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::ml::model::RidgeModel;

/// File name of the serialised model inside a model directory
pub const MODEL_FILE_NAME: &str = "model.pkl";

/// Environment variable a hosting runtime uses to point at the model
pub const MODEL_DIR_ENV: &str = "AZUREML_MODEL_DIR";

/// Directory used when MODEL_DIR_ENV is not set
pub const DEFAULT_MODEL_DIR: &str = ".";

/// Resolve the model directory from the value of MODEL_DIR_ENV
/// (or an explicit flag), falling back to the current directory
/// when it is unset or empty.
pub fn resolve_model_dir(value: Option<String>) -> PathBuf {
    match value {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_MODEL_DIR),
    }
}

/// Reads and writes the model artifact inside one directory.
#[derive(Debug, Clone)]
pub struct ModelStore {
    /// Directory holding model.pkl
    dir: PathBuf,
}

impl ModelStore {
    /// Point the store at a directory. Nothing is created until
    /// the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the artifact: <dir>/model.pkl
    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE_NAME)
    }

    /// Serialise `model` to <dir>/model.pkl, creating <dir> first.
    /// Overwrites any previous artifact. Returns the written path.
    pub fn save_model(&self, model: &RidgeModel) -> Result<PathBuf> {
        // Like `mkdir -p`; succeeds if the directory already exists
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))?;

        let path = self.model_path();
        let json = serde_json::to_string_pretty(model)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write model to '{}'", path.display()))?;

        tracing::debug!("Saved model artifact to '{}'", path.display());
        Ok(path)
    }

    /// Deserialise the model from <dir>/model.pkl.
    pub fn load_model(&self) -> Result<RidgeModel> {
        let path = self.model_path();

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read model from '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;

        let model: RidgeModel = serde_json::from_str(&json)
            .with_context(|| format!("Model file '{}' is not a valid artifact", path.display()))?;
        model
            .validate()
            .with_context(|| format!("Model file '{}' is corrupt", path.display()))?;

        tracing::info!(
            "Loaded model from '{}' ({} features, alpha={})",
            path.display(),
            model.coefficients.len(),
            model.alpha
        );
        Ok(model)
    }
}
