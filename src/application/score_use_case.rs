// ============================================================
// Layer 2 — Score Use Case
// ============================================================
// The invocation boundary a hosting runtime talks to.
//
//   init  (once per process)
//     model dir (AZUREML_MODEL_DIR or ".") → model.pkl → Inferencer
//
//   run   (once per request)
//     raw text → ScoreRequest → matrix → predictions
//
// The context is built once and then only read, so one
// instance can be shared by reference (or behind an Arc)
// across as many invocations as the host likes.
//
// `run` is total: every failure, whether malformed JSON, a
// missing `data` field, ragged rows, or a feature mismatch,
// comes back as {"error": "..."} and the context stays usable.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::payload::{ScoreRequest, ScoreResponse};
use crate::infra::checkpoint::{resolve_model_dir, ModelStore, MODEL_DIR_ENV};
use crate::ml::inferencer::Inferencer;
use crate::ml::model::RidgeModel;

pub struct ScoringContext {
    inferencer: Inferencer<RidgeModel>,
}

impl ScoringContext {
    /// Load <model_dir>/model.pkl. The caller resolves the
    /// directory (see `resolve_model_dir`).
    pub fn init(model_dir: impl AsRef<Path>) -> Result<Self> {
        let store = ModelStore::new(model_dir.as_ref());
        let model = store.load_model()?;
        Ok(Self::from_model(model))
    }

    /// Load the model from the directory named by AZUREML_MODEL_DIR,
    /// or from the current directory when it is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::init(resolve_model_dir(std::env::var(MODEL_DIR_ENV).ok()))
    }

    /// Wrap an already fitted model.
    pub fn from_model(model: RidgeModel) -> Self {
        Self { inferencer: Inferencer::new(model) }
    }

    /// Score one raw payload. Never fails; errors are returned
    /// inside the response envelope.
    pub fn run(&self, raw: &str) -> ScoreResponse {
        match self.try_run(raw) {
            Ok(preds) => ScoreResponse::Predictions(preds),
            Err(e) => {
                tracing::warn!("Scoring request failed: {e:#}");
                ScoreResponse::error(format!("{e:#}"))
            }
        }
    }

    fn try_run(&self, raw: &str) -> Result<Vec<f64>> {
        let request: ScoreRequest =
            serde_json::from_str(raw).context("invalid request payload")?;
        self.inferencer.predict_rows(&request.data)
    }
}
