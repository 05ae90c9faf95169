//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds nothing per-session: only the optional analysis upstream and the
//! upload size limit.

use std::sync::Arc;

use crate::relay::AnalysisUpstream;

/// Clone is required by Axum; the upstream is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `ANALYSIS_UPSTREAM_URL` is unset (demo mode).
    pub upstream: Option<Arc<dyn AnalysisUpstream>>,
    pub max_upload_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Arc<dyn AnalysisUpstream>>, max_upload_bytes: usize) -> Self {
        Self { upstream, max_upload_bytes }
    }
}
