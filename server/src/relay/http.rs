//! `reqwest`-backed upstream.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use super::{AnalysisUpstream, RelayError, UpstreamRequest, UpstreamResponse};
use crate::config::UpstreamConfig;

pub struct HttpUpstream {
    http: reqwest::Client,
    url: String,
}

impl HttpUpstream {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::HttpClientBuild`] if the TLS backend cannot be initialized.
    pub fn new(config: &UpstreamConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url.clone() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Roles that are not plain ASCII go in the query string, which the
    /// backend reads when the header is absent.
    fn build_request(&self, request: UpstreamRequest) -> reqwest::RequestBuilder {
        let builder = self.http.post(&self.url);
        let builder = if feedback::role_fits_header(&request.target_role) {
            builder.header(feedback::TARGET_ROLE_HEADER, request.target_role)
        } else {
            builder.query(&[(feedback::TARGET_ROLE_QUERY, request.target_role.as_str())])
        };
        builder.header(CONTENT_TYPE, request.content_type).body(request.body)
    }
}

#[async_trait::async_trait]
impl AnalysisUpstream for HttpUpstream {
    async fn analyze(&self, request: UpstreamRequest) -> Result<UpstreamResponse, RelayError> {
        let resp = self
            .build_request(request)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes().await.map_err(|e| RelayError::Request(e.to_string()))?;
        Ok(UpstreamResponse { status, content_type, body })
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
