//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid ANALYSIS_UPSTREAM_URL '{url}': {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub url: String,
    pub timeouts: RelayTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` puts the relay in demo mode.
    pub upstream: Option<UpstreamConfig>,
    pub max_upload_bytes: usize,
    /// Optional static directory served for paths no other route claims.
    pub site_dir: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ANALYSIS_UPSTREAM_URL`: absolute http(s) URL; unset enables demo mode
    /// - `ANALYSIS_REQUEST_TIMEOUT_SECS`: default 120
    /// - `ANALYSIS_CONNECT_TIMEOUT_SECS`: default 10
    /// - `ANALYSIS_MAX_UPLOAD_BYTES`: default 10 MiB
    /// - `SITE_DIR`: unset disables the static fallback
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PORT` is not a valid port or the upstream
    /// URL is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let timeouts = RelayTimeouts {
            request_secs: env_parse("ANALYSIS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("ANALYSIS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let upstream = non_empty_var("ANALYSIS_UPSTREAM_URL")
            .map(|url| parse_upstream_url(&url).map(|url| UpstreamConfig { url, timeouts }))
            .transpose()?;

        Ok(Self {
            port,
            upstream,
            max_upload_bytes: env_parse("ANALYSIS_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            site_dir: non_empty_var("SITE_DIR"),
        })
    }
}

fn parse_upstream_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUpstreamUrl { url: raw.to_owned(), reason };
    let url = reqwest::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
