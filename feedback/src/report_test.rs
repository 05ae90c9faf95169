use super::*;

fn report_for(value: serde_json::Value) -> Report {
    Report::from_result(&AnalysisResult::from_value(&value).unwrap())
}

#[test]
fn score_above_range_is_clamped_to_100() {
    let report = report_for(serde_json::json!({ "analysis": { "overall_score": 150 } }));
    assert_eq!(report.score, Some(ScoreBadge { value: 100, tier: ScoreTier::High }));
    assert_eq!(report.score.unwrap().label(), "100/100");
}

#[test]
fn score_below_range_is_clamped_to_0() {
    let report = report_for(serde_json::json!({ "analysis": { "overall_score": -20 } }));
    assert_eq!(report.score, Some(ScoreBadge { value: 0, tier: ScoreTier::Low }));
}

#[test]
fn non_numeric_score_renders_no_badge() {
    let report = report_for(serde_json::json!({ "analysis": { "overall_score": "great" } }));
    assert!(report.score.is_none());
}

#[test]
fn score_tier_boundaries() {
    assert_eq!(ScoreTier::from_score(100), ScoreTier::High);
    assert_eq!(ScoreTier::from_score(75), ScoreTier::High);
    assert_eq!(ScoreTier::from_score(74), ScoreTier::Medium);
    assert_eq!(ScoreTier::from_score(50), ScoreTier::Medium);
    assert_eq!(ScoreTier::from_score(49), ScoreTier::Low);
    assert_eq!(ScoreTier::Medium.as_str(), "medium");
}

#[test]
fn empty_strengths_render_empty_state() {
    let report = report_for(serde_json::json!({ "analysis": { "strengths": [] } }));
    assert_eq!(report.strengths.body, Section::Empty(EMPTY_STRENGTHS));
    assert!(report.strengths.body.is_empty());
}

#[test]
fn missing_analysis_renders_all_defaults() {
    let report = report_for(serde_json::json!({}));
    assert!(report.score.is_none());
    assert!(report.summary.is_none());
    assert!(report.raw.is_none());
    assert_eq!(report.strengths.body, Section::Empty(EMPTY_STRENGTHS));
    assert_eq!(report.weaknesses.body, Section::Empty(EMPTY_WEAKNESSES));
    assert_eq!(report.missing_keywords.body, Section::Empty(EMPTY_KEYWORDS));
    assert_eq!(report.suggestions.body, Section::Empty(EMPTY_SUGGESTIONS));
}

#[test]
fn well_formed_payload_is_reflected_literally() {
    let report = report_for(serde_json::json!({
        "targetRole": "Cloud Engineer",
        "uploadedAt": "2025-03-04T05:06:07+00:00",
        "blobUrl": "https://store.example/r.pdf",
        "analysis": {
            "overall_score": 81,
            "summary": "Strong AWS background.",
            "strengths": ["Terraform", "EKS"],
            "weaknesses": ["Few metrics"],
            "missing_keywords": ["Azure", "Kubernetes"],
            "improvement_suggestions": ["Add numbers", "Mention on-call"]
        }
    }));
    assert_eq!(report.target_role.as_deref(), Some("Cloud Engineer"));
    assert_eq!(report.score.map(|b| b.value), Some(81));
    assert_eq!(report.summary.as_deref(), Some("Strong AWS background."));
    assert_eq!(report.strengths.body, Section::Items(vec!["Terraform".into(), "EKS".into()]));
    assert_eq!(report.weaknesses.body, Section::Items(vec!["Few metrics".into()]));
    assert_eq!(report.missing_keywords.body, Section::Items(vec!["Azure".into(), "Kubernetes".into()]));
    assert_eq!(
        report.suggestions.body,
        Section::Items(vec!["Add numbers".into(), "Mention on-call".into()])
    );
}

#[test]
fn list_sections_keep_display_order() {
    let report = report_for(serde_json::json!({}));
    let titles: Vec<_> = report.list_sections().iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Strengths", "Weaknesses", "Improvement Suggestions"]);
}
