use super::*;
use crate::config::RelayTimeouts;
use axum::body::Bytes;

fn upstream() -> HttpUpstream {
    HttpUpstream::new(&UpstreamConfig {
        url: "https://func.example/api/analyze_resume".to_owned(),
        timeouts: RelayTimeouts { request_secs: 5, connect_secs: 1 },
    })
    .unwrap()
}

fn submission(role: &str) -> UpstreamRequest {
    UpstreamRequest {
        target_role: role.to_owned(),
        content_type: "application/pdf".to_owned(),
        body: Bytes::from_static(b"%PDF"),
    }
}

#[test]
fn ascii_role_travels_in_header() {
    let req = upstream().build_request(submission("Data Engineer")).build().unwrap();
    assert_eq!(req.headers()[feedback::TARGET_ROLE_HEADER], "Data Engineer");
    assert_eq!(req.headers()[CONTENT_TYPE], "application/pdf");
    assert!(req.url().query().is_none());
}

#[test]
fn non_ascii_role_travels_in_query() {
    let req = upstream().build_request(submission("Ingénieur")).build().unwrap();
    assert!(req.headers().get(feedback::TARGET_ROLE_HEADER).is_none());
    let role: Vec<_> = req.url().query_pairs().filter(|(k, _)| k == feedback::TARGET_ROLE_QUERY).collect();
    assert_eq!(role.len(), 1);
    assert_eq!(role[0].1, "Ingénieur");
}
