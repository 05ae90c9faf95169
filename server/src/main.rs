#![recursion_limit = "256"]

mod config;
mod relay;
mod routes;
mod state;

use std::sync::Arc;

use relay::AnalysisUpstream;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Without an upstream the relay answers with the demo payload.
    let upstream: Option<Arc<dyn AnalysisUpstream>> = match config.upstream.as_ref() {
        Some(upstream_config) => {
            let client = relay::http::HttpUpstream::new(upstream_config).expect("analysis upstream client init failed");
            tracing::info!(url = client.url(), "analysis upstream configured");
            Some(Arc::new(client) as Arc<dyn AnalysisUpstream>)
        }
        None => {
            tracing::warn!("ANALYSIS_UPSTREAM_URL not set; serving demo analysis");
            None
        }
    };

    let state = state::AppState::new(upstream, config.max_upload_bytes);
    let app = routes::leptos_app(state, config.site_dir.clone()).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "cvlens listening");
    axum::serve(listener, app).await.expect("server failed");
}
