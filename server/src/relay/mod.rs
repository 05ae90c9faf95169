//! Relay to the external resume analysis service.
//!
//! DESIGN
//! ======
//! The server never analyzes a resume itself. `AnalysisUpstream` is the seam
//! between the route and whatever answers the request: the HTTP client in
//! `http`, or a mock in tests. The upstream's status and body are passed back
//! to the browser unchanged.

pub mod http;

use axum::Json;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors produced while relaying a submission.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The request carried no file bytes.
    #[error("No file provided.")]
    EmptyBody,

    /// The upstream could not be reached or its body could not be read.
    #[error("analysis upstream request failed: {0}")]
    Request(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyBody => StatusCode::BAD_REQUEST,
            Self::Request(_) => StatusCode::BAD_GATEWAY,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures use the analysis backend's own error shape: `{"error": "..."}`.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// A submission as forwarded upstream.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub target_role: String,
    pub content_type: String,
    pub body: Bytes,
}

/// The upstream's answer, relayed verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Anything that can answer an analysis request. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AnalysisUpstream: Send + Sync {
    /// Forward one submission and return the raw answer.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Request`] if the upstream is unreachable or the
    /// response body cannot be read. Non-2xx answers are not errors here.
    async fn analyze(&self, request: UpstreamRequest) -> Result<UpstreamResponse, RelayError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
