//! Analysis payload returned by the resume analysis endpoint.
//!
//! DESIGN
//! ======
//! The payload is produced by an external service and consumed read-only.
//! Decoding walks a `serde_json::Value` instead of deriving `Deserialize`, so
//! a missing or wrong-typed field falls back to its default rather than
//! rejecting the whole response:
//! - missing/non-array lists become empty; non-string entries are skipped
//! - a missing or non-numeric `overall_score` becomes `None`
//! - a missing or non-object `analysis` becomes `Analysis::default()`

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::Serialize;
use serde_json::{Map, Value};

/// Error returned by [`AnalysisResult::from_slice`] and [`AnalysisResult::from_value`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
    /// The response body was JSON but not an object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Top-level response from the analysis endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Authenticated user id as reported by the backend (`anonymous` when unauthenticated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Role the backend tailored its analysis to.
    pub target_role: Option<String>,
    /// Upload timestamp, passed through verbatim (ISO-8601 from the backend).
    pub uploaded_at: Option<String>,
    /// Where the backend stored the uploaded PDF.
    pub blob_url: Option<String>,
    pub analysis: Analysis,
}

/// Categorized feedback produced by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Analysis {
    /// Unclamped score as sent; use [`Analysis::score`] for display.
    pub overall_score: Option<f64>,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    /// Unstructured model output, sent when the backend could not parse it as JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl AnalysisResult {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not JSON or not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    /// Decode an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAnObject`] if `value` is not a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let obj = value.as_object().ok_or_else(|| DecodeError::NotAnObject(kind_name(value)))?;
        let analysis = obj.get("analysis").and_then(Value::as_object).map(Analysis::from_map).unwrap_or_default();
        Ok(Self {
            user_id: string_field(obj, "userId"),
            target_role: string_field(obj, "targetRole"),
            uploaded_at: string_field(obj, "uploadedAt"),
            blob_url: string_field(obj, "blobUrl"),
            analysis,
        })
    }
}

impl Analysis {
    fn from_map(obj: &Map<String, Value>) -> Self {
        Self {
            overall_score: obj.get("overall_score").and_then(Value::as_f64).filter(|n| n.is_finite()),
            summary: string_field(obj, "summary").filter(|s| !s.trim().is_empty()),
            strengths: string_list(obj, "strengths"),
            weaknesses: string_list(obj, "weaknesses"),
            missing_keywords: string_list(obj, "missing_keywords"),
            improvement_suggestions: string_list(obj, "improvement_suggestions"),
            raw: string_field(obj, "raw").filter(|s| !s.trim().is_empty()),
        }
    }

    /// Display score: clamped to `[0, 100]`, `None` when the backend sent no number.
    #[must_use]
    pub fn score(&self) -> Option<u8> {
        self.overall_score.and_then(clamp_score)
    }
}

/// Clamp a raw score into `[0, 100]` and round to the nearest integer.
///
/// Returns `None` for NaN/infinite input.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_score(raw: f64) -> Option<u8> {
    if !raw.is_finite() {
        return None;
    }
    Some(raw.clamp(0.0, 100.0).round() as u8)
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).map(str::to_owned).collect(),
        _ => Vec::new(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
