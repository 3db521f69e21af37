// ============================================================
// Layer 3 — Scoring Payload Types
// ============================================================
// The request and response shapes of the invocation boundary.
//
// Request:
//   {"data": [[0.05, 0.05, ...], [...]]}
//
// Response (success):
//   [152.13, 98.4]
//
// Response (any failure):
//   {"error": "X has 3 features, but the model expects 10"}
//
// Reference: serde documentation (untagged enums)

use serde::{Deserialize, Serialize};

/// One scoring request. Extra top-level fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    /// Rows of feature values, one inner array per sample
    pub data: Vec<Vec<f64>>,
}

/// The result of a single invocation.
///
/// Untagged so that success serialises as a bare JSON array
/// and failure as an object with a single `error` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreResponse {
    Predictions(Vec<f64>),
    Error { error: String },
}

impl ScoreResponse {
    pub fn error(message: impl Into<String>) -> Self {
        ScoreResponse::Error { error: message.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ScoreResponse::Error { .. })
    }

    /// Render the response as a JSON string.
    pub fn to_json(&self) -> String {
        // Vec<f64> and String cannot fail to serialise; non-finite
        // floats come out as null.
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!("{{\"error\":{:?}}}", e.to_string()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictions_serialise_as_bare_array() {
        let resp = ScoreResponse::Predictions(vec![1.5, 2.0]);
        assert_eq!(resp.to_json(), "[1.5,2.0]");
    }

    #[test]
    fn test_error_serialises_as_single_field_object() {
        let resp = ScoreResponse::error("boom");
        assert_eq!(resp.to_json(), r#"{"error":"boom"}"#);
        assert!(resp.is_error());
    }

    #[test]
    fn test_request_accepts_integers_and_ignores_extra_fields() {
        let req: ScoreRequest =
            serde_json::from_str(r#"{"data": [[1, 2.5]], "id": "abc"}"#).unwrap();
        assert_eq!(req.data, vec![vec![1.0, 2.5]]);
    }

    #[test]
    fn test_request_requires_data_field() {
        let res = serde_json::from_str::<ScoreRequest>(r#"{"rows": [[1.0]]}"#);
        assert!(res.is_err());
    }
}
