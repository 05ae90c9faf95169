use super::*;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:3000/", "/healthz"), "http://localhost:3000/healthz");
    assert_eq!(
        endpoint("https://cv.example", feedback::ANALYZE_PATH),
        "https://cv.example/api/analyze_resume"
    );
}

#[test]
fn decode_response_reads_payload() {
    let body = br#"{"analysis":{"overall_score":-5,"weaknesses":["Gaps"]}}"#;
    let result = decode_response(true, 200, body).unwrap();
    assert_eq!(result.analysis.score(), Some(0));
    assert_eq!(result.analysis.weaknesses, vec!["Gaps"]);
}

#[test]
fn decode_response_error_displays_reason() {
    let err = decode_response(false, 400, br#"{"error":"No file provided."}"#).unwrap_err();
    assert_eq!(err.to_string(), "Error analyzing resume: No file provided.");
}

#[test]
fn decode_response_garbage_is_analysis_error() {
    let err = decode_response(true, 200, b"<html></html>").unwrap_err();
    assert!(matches!(err, CliError::Analysis(_)));
    assert!(err.to_string().starts_with("Error analyzing resume: invalid JSON response"));
}

#[test]
fn no_file_error_uses_validation_message() {
    assert_eq!(CliError::NoFile.to_string(), feedback::NO_FILE_MESSAGE);
}

#[tokio::test]
async fn unreachable_server_is_analysis_error() {
    // Port 9 (discard) on localhost is closed in test environments.
    let err = submit("http://127.0.0.1:9", "SRE", b"%PDF".to_vec()).await.unwrap_err();
    assert!(matches!(err, CliError::Analysis(_)));
}

#[test]
fn ascii_role_is_sent_as_header() {
    let req = build_request(&reqwest::Client::new(), "http://localhost:3000/api/analyze_resume", "SRE", b"%PDF".to_vec())
        .build()
        .unwrap();
    assert_eq!(req.headers()[feedback::TARGET_ROLE_HEADER], "SRE");
    assert!(req.url().query().is_none());
}

#[test]
fn non_ascii_role_is_sent_as_query() {
    let req = build_request(
        &reqwest::Client::new(),
        "http://localhost:3000/api/analyze_resume",
        "Ingénieur données",
        b"%PDF".to_vec(),
    )
    .build()
    .unwrap();
    assert!(req.headers().get(feedback::TARGET_ROLE_HEADER).is_none());
    let (key, value) = req.url().query_pairs().next().unwrap();
    assert_eq!(key, feedback::TARGET_ROLE_QUERY);
    assert_eq!(value, "Ingénieur données");
}
