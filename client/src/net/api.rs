//! HTTP call to the resume analysis endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`, sending the picked
//! `File` as the raw request body. No timeout and no retry; the page keeps
//! its busy indicator up until the call settles.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` carrying the underlying reason; the
//! state layer wraps it into the displayed message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use feedback::{AnalysisResult, failure_reason, role_fits_header};

#[cfg(feature = "hydrate")]
use crate::state::submission::PendingSubmit;

#[cfg(any(test, feature = "hydrate"))]
const PDF_MIME: &str = "application/pdf";

/// Content type to send for a picked file; browsers leave it blank for unknown types.
#[cfg(any(test, feature = "hydrate"))]
fn body_content_type(mime: &str) -> &str {
    if mime.trim().is_empty() || !mime.is_ascii() { PDF_MIME } else { mime }
}

/// Where the target role is carried on the request.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
enum RoleField<'a> {
    Header(&'a str),
    /// `fetch` throws on header values outside Latin-1, and gloo-net turns
    /// that into a panic, so anything but plain ASCII goes in the URL.
    Query(&'a str),
}

#[cfg(any(test, feature = "hydrate"))]
fn role_field(role: &str) -> RoleField<'_> {
    if role_fits_header(role) { RoleField::Header(role) } else { RoleField::Query(role) }
}

/// Turn a settled response into the view's outcome.
#[cfg(any(test, feature = "hydrate"))]
fn decode_response(ok: bool, status: u16, body: &[u8]) -> Result<AnalysisResult, String> {
    if !ok {
        return Err(failure_reason(status, body));
    }
    AnalysisResult::from_slice(body).map_err(|e| e.to_string())
}

/// Submit a resume for analysis via `POST /api/analyze_resume`.
///
/// # Errors
///
/// Returns the failure reason if the request cannot be sent, the server
/// answers with a non-OK status, or the body is not a JSON object.
#[cfg(feature = "hydrate")]
pub async fn analyze_resume(file: &web_sys::File, pending: &PendingSubmit) -> Result<AnalysisResult, String> {
    let builder = gloo_net::http::Request::post(feedback::ANALYZE_PATH)
        .header("content-type", body_content_type(&pending.mime));
    let builder = match role_field(&pending.target_role) {
        RoleField::Header(role) => builder.header(feedback::TARGET_ROLE_HEADER, role),
        RoleField::Query(role) => builder.query([(feedback::TARGET_ROLE_QUERY, role)]),
    };
    let resp = builder
        .body(file.clone())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = resp.status();
    let body = resp.binary().await.map_err(|e| e.to_string())?;
    decode_response(resp.ok(), status, &body)
}
