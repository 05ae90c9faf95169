use super::*;

#[test]
fn relay_error_statuses() {
    assert_eq!(RelayError::EmptyBody.status(), StatusCode::BAD_REQUEST);
    assert_eq!(RelayError::Request("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(RelayError::HttpClientBuild("tls".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn empty_body_message_matches_backend() {
    assert_eq!(RelayError::EmptyBody.to_string(), "No file provided.");
}

#[tokio::test]
async fn relay_error_response_uses_error_shape() {
    let resp = RelayError::Request("connection refused".into()).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "analysis upstream request failed: connection refused");
}
