mod analysis;
mod config;
mod errors;
mod extract;
mod generation;
mod llm_client;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::ProviderClient;
use crate::render::export::{DocumentExporter, WkhtmltopdfExporter};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the AI provider client. Missing keys are not fatal: every
    // provider-backed path has a deterministic fallback.
    let provider = ProviderClient::from_config(&config);
    info!(
        "AI provider: {} (available: {})",
        provider.provider_name(),
        provider.is_available()
    );

    // Probe for the PDF converter once at startup.
    let exporter = Arc::new(WkhtmltopdfExporter::probe().await);
    if exporter.is_available() {
        info!("PDF converter detected (wkhtmltopdf)");
    } else {
        warn!("wkhtmltopdf not found. PDF export will return raw HTML.");
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        provider,
        exporter,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
