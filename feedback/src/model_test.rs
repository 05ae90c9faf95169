use super::*;

fn full_payload() -> Value {
    serde_json::json!({
        "userId": "anonymous",
        "targetRole": "Data Engineer",
        "blobUrl": "https://store.example/resumes/abc.pdf",
        "uploadedAt": "2025-01-01T12:00:00+00:00",
        "analysis": {
            "overall_score": 72,
            "summary": "Solid pipeline experience.",
            "strengths": ["Spark", "Airflow"],
            "weaknesses": ["No cloud certs"],
            "missing_keywords": ["Kafka", "dbt"],
            "improvement_suggestions": ["Quantify impact"]
        }
    })
}

// =============================================================
// Well-formed payloads
// =============================================================

#[test]
fn from_value_reads_all_fields() {
    let result = AnalysisResult::from_value(&full_payload()).unwrap();
    assert_eq!(result.user_id.as_deref(), Some("anonymous"));
    assert_eq!(result.target_role.as_deref(), Some("Data Engineer"));
    assert_eq!(result.blob_url.as_deref(), Some("https://store.example/resumes/abc.pdf"));
    assert_eq!(result.uploaded_at.as_deref(), Some("2025-01-01T12:00:00+00:00"));
    assert_eq!(result.analysis.overall_score, Some(72.0));
    assert_eq!(result.analysis.summary.as_deref(), Some("Solid pipeline experience."));
    assert_eq!(result.analysis.strengths, vec!["Spark", "Airflow"]);
    assert_eq!(result.analysis.weaknesses, vec!["No cloud certs"]);
    assert_eq!(result.analysis.missing_keywords, vec!["Kafka", "dbt"]);
    assert_eq!(result.analysis.improvement_suggestions, vec!["Quantify impact"]);
    assert!(result.analysis.raw.is_none());
}

#[test]
fn from_slice_decodes_bytes() {
    let body = serde_json::to_vec(&full_payload()).unwrap();
    let result = AnalysisResult::from_slice(&body).unwrap();
    assert_eq!(result.analysis.score(), Some(72));
}

// =============================================================
// Defensive defaults
// =============================================================

#[test]
fn missing_analysis_defaults_everything() {
    let value = serde_json::json!({ "targetRole": "SRE" });
    let result = AnalysisResult::from_value(&value).unwrap();
    assert_eq!(result.analysis, Analysis::default());
    assert!(result.blob_url.is_none());
    assert!(result.uploaded_at.is_none());
}

#[test]
fn non_object_analysis_is_treated_as_missing() {
    let value = serde_json::json!({ "analysis": "oops" });
    let result = AnalysisResult::from_value(&value).unwrap();
    assert_eq!(result.analysis, Analysis::default());
}

#[test]
fn non_numeric_score_is_absent() {
    for score in [serde_json::json!("85"), serde_json::json!(null), serde_json::json!(true), serde_json::json!([1])] {
        let value = serde_json::json!({ "analysis": { "overall_score": score } });
        let result = AnalysisResult::from_value(&value).unwrap();
        assert_eq!(result.analysis.overall_score, None, "score {score:?} should be absent");
        assert_eq!(result.analysis.score(), None);
    }
}

#[test]
fn wrong_typed_lists_become_empty() {
    let value = serde_json::json!({
        "analysis": {
            "strengths": "Spark",
            "weaknesses": null,
            "missing_keywords": {"a": 1}
        }
    });
    let analysis = AnalysisResult::from_value(&value).unwrap().analysis;
    assert!(analysis.strengths.is_empty());
    assert!(analysis.weaknesses.is_empty());
    assert!(analysis.missing_keywords.is_empty());
    assert!(analysis.improvement_suggestions.is_empty());
}

#[test]
fn non_string_list_entries_are_skipped() {
    let value = serde_json::json!({ "analysis": { "strengths": ["Rust", 7, null, "Go"] } });
    let analysis = AnalysisResult::from_value(&value).unwrap().analysis;
    assert_eq!(analysis.strengths, vec!["Rust", "Go"]);
}

#[test]
fn blank_summary_is_absent() {
    let value = serde_json::json!({ "analysis": { "summary": "   " } });
    assert!(AnalysisResult::from_value(&value).unwrap().analysis.summary.is_none());
}

#[test]
fn raw_fallback_is_kept() {
    let value = serde_json::json!({ "analysis": { "raw": "model said hi" } });
    let analysis = AnalysisResult::from_value(&value).unwrap().analysis;
    assert_eq!(analysis.raw.as_deref(), Some("model said hi"));
}

// =============================================================
// Rejected bodies
// =============================================================

#[test]
fn invalid_json_is_an_error() {
    let err = AnalysisResult::from_slice(b"<html>").unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
    assert!(err.to_string().starts_with("invalid JSON response"));
}

#[test]
fn non_object_body_is_an_error() {
    let err = AnalysisResult::from_slice(b"[1,2]").unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject("array")));
}

// =============================================================
// Score clamping
// =============================================================

#[test]
fn clamp_score_bounds() {
    assert_eq!(clamp_score(150.0), Some(100));
    assert_eq!(clamp_score(-20.0), Some(0));
    assert_eq!(clamp_score(0.0), Some(0));
    assert_eq!(clamp_score(100.0), Some(100));
    assert_eq!(clamp_score(67.4), Some(67));
    assert_eq!(clamp_score(67.5), Some(68));
}

#[test]
fn clamp_score_rejects_non_finite() {
    assert_eq!(clamp_score(f64::NAN), None);
    assert_eq!(clamp_score(f64::INFINITY), None);
}

#[test]
fn serialize_uses_backend_field_names() {
    let result = AnalysisResult::from_value(&full_payload()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["targetRole"], "Data Engineer");
    assert_eq!(json["blobUrl"], "https://store.example/resumes/abc.pdf");
    assert_eq!(json["analysis"]["missing_keywords"][1], "dbt");
    assert!(json["analysis"].get("raw").is_none());
}
