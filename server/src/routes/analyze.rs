//! `POST /api/analyze_resume`: relay a resume to the analysis upstream.
//!
//! The request carries the raw PDF as its body and the role in the
//! `x-target-role` header (`targetRole` query parameter as a fallback). With
//! no upstream configured the route answers with the demo payload instead.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::relay::{RelayError, UpstreamRequest, UpstreamResponse};
use crate::state::AppState;

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Default, Deserialize)]
pub struct RoleQuery {
    #[serde(rename = "targetRole")]
    pub target_role: Option<String>,
}

pub async fn analyze_resume(
    State(state): State<AppState>,
    Query(query): Query<RoleQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    if body.is_empty() {
        return Err(RelayError::EmptyBody);
    }
    let target_role = resolve_role(&headers, query.target_role.as_deref());
    tracing::info!(role = %target_role, bytes = body.len(), "resume submitted");

    let Some(upstream) = state.upstream.as_ref() else {
        tracing::info!("no analysis upstream configured; answering with demo payload");
        let result = feedback::demo_result(&target_role, now_rfc3339());
        return Ok(Json(result).into_response());
    };

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(PDF_MIME)
        .to_owned();
    let request = UpstreamRequest { target_role, content_type, body };
    let response = upstream.analyze(request).await.inspect_err(|e| {
        tracing::error!(error = %e, "analysis upstream failed");
    })?;
    if response.status >= 400 {
        tracing::warn!(status = response.status, "analysis upstream returned an error status");
    }
    Ok(relay_response(response))
}

/// Role from the header, then the query parameter, then the default role.
pub(crate) fn resolve_role(headers: &HeaderMap, query_role: Option<&str>) -> String {
    let header_role = headers.get(feedback::TARGET_ROLE_HEADER).map(header_text);
    [header_role.as_deref(), query_role]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|role| !role.is_empty())
        .unwrap_or(feedback::DEFAULT_TARGET_ROLE)
        .to_owned()
}

/// Header bytes as text: UTF-8 when valid, otherwise Latin-1 (one char per byte).
pub(crate) fn header_text(value: &HeaderValue) -> String {
    let bytes = value.as_bytes();
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

pub(crate) fn relay_response(upstream: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .content_type
        .and_then(|ct| HeaderValue::from_str(&ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    (status, [(CONTENT_TYPE, content_type)], upstream.body).into_response()
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
