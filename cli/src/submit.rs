//! One request/response cycle against the analysis endpoint.
//!
//! Same contract as the web view: one POST with the role and the raw
//! bytes, no retry, and every transport or decode failure surfaced as
//! [`CliError::Analysis`] carrying the underlying reason.

use feedback::{AnalysisResult, failure_reason};
use reqwest::header::CONTENT_TYPE;

use crate::CliError;

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

pub(crate) async fn submit(base_url: &str, role: &str, pdf: Vec<u8>) -> Result<AnalysisResult, CliError> {
    let url = endpoint(base_url, feedback::ANALYZE_PATH);
    tracing::debug!(%url, %role, bytes = pdf.len(), "submitting resume");

    let response = build_request(&reqwest::Client::new(), &url, role, pdf)
        .send()
        .await
        .map_err(|e| CliError::Analysis(e.to_string()))?;
    let status = response.status();
    let body = response.bytes().await.map_err(|e| CliError::Analysis(e.to_string()))?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "analysis response received");

    decode_response(status.is_success(), status.as_u16(), &body)
}

/// Plain-ASCII roles ride in the header; anything else goes in the query
/// string so the server sees exactly what was typed.
fn build_request(http: &reqwest::Client, url: &str, role: &str, pdf: Vec<u8>) -> reqwest::RequestBuilder {
    let builder = http.post(url);
    let builder = if feedback::role_fits_header(role) {
        builder.header(feedback::TARGET_ROLE_HEADER, role)
    } else {
        builder.query(&[(feedback::TARGET_ROLE_QUERY, role)])
    };
    builder.header(CONTENT_TYPE, "application/pdf").body(pdf)
}

fn decode_response(ok: bool, status: u16, body: &[u8]) -> Result<AnalysisResult, CliError> {
    if !ok {
        return Err(CliError::Analysis(failure_reason(status, body)));
    }
    AnalysisResult::from_slice(body).map_err(|e| CliError::Analysis(e.to_string()))
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
