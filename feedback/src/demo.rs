//! Fixed demo payload, served when no analysis upstream is configured.

use crate::model::{Analysis, AnalysisResult};

#[must_use]
pub fn demo_analysis() -> Analysis {
    Analysis {
        overall_score: Some(50.0),
        summary: Some("Demo mode: no analysis upstream configured.".to_owned()),
        strengths: vec!["Demo strength 1".to_owned(), "Demo strength 2".to_owned()],
        weaknesses: vec!["Demo weakness 1".to_owned(), "Demo weakness 2".to_owned()],
        missing_keywords: vec!["Azure".to_owned(), "Kubernetes".to_owned()],
        improvement_suggestions: vec![
            "Configure an analysis upstream to get real feedback.".to_owned(),
            "Add concrete metrics and cloud technologies to your CV.".to_owned(),
        ],
        raw: None,
    }
}

/// Wrap [`demo_analysis`] in a full response. No file is stored, so `blob_url` is `None`.
#[must_use]
pub fn demo_result(target_role: &str, uploaded_at: String) -> AnalysisResult {
    AnalysisResult {
        user_id: Some("anonymous".to_owned()),
        target_role: Some(target_role.to_owned()),
        uploaded_at: Some(uploaded_at),
        blob_url: None,
        analysis: demo_analysis(),
    }
}
