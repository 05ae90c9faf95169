//! Shared resume feedback model for the web view, the server relay and the CLI.
//!
//! This crate owns the shape of the analysis payload returned by the external
//! resume analysis endpoint and the display decisions derived from it. It
//! never talks to the network; callers hand it raw bytes or JSON values.

pub mod demo;
pub mod model;
pub mod report;

pub use demo::{demo_analysis, demo_result};
pub use model::{Analysis, AnalysisResult, DecodeError, clamp_score};
pub use report::{Report, ScoreBadge, ScoreTier, Section, SectionView};

/// Path of the analysis endpoint, relative to the site origin.
pub const ANALYZE_PATH: &str = "/api/analyze_resume";

/// Request header carrying the free-text target role.
pub const TARGET_ROLE_HEADER: &str = "x-target-role";

/// Query parameter carrying the role when it cannot travel in the header.
pub const TARGET_ROLE_QUERY: &str = "targetRole";

/// Role used when the user has not typed one.
pub const DEFAULT_TARGET_ROLE: &str = "Cloud Engineer";

/// Validation message shown when submit is pressed without a file.
pub const NO_FILE_MESSAGE: &str = "Please upload a PDF first.";

/// Format a transport or decode failure for display.
#[must_use]
pub fn error_message(reason: &str) -> String {
    format!("Error analyzing resume: {reason}")
}

/// Extract a human-readable reason from a non-success response.
///
/// The analysis backend reports failures as `{"error": "..."}`; anything else
/// falls back to the bare status code.
#[must_use]
pub fn failure_reason(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| format!("status {status}"))
}

/// Resolve the role to submit: trimmed input, or the default when blank.
#[must_use]
pub fn effective_role(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.is_empty() { DEFAULT_TARGET_ROLE } else { trimmed }
}

/// Whether `role` can be sent verbatim as a header value.
///
/// Browsers reject anything above U+00FF and disagree on how U+0080..U+00FF
/// is encoded, so only printable ASCII (and tab) qualifies. Other roles go in
/// the [`TARGET_ROLE_QUERY`] parameter, which the analysis backend reads when
/// the header is absent.
#[must_use]
pub fn role_fits_header(role: &str) -> bool {
    role.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
