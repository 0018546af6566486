use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ProviderClient;
use crate::render::export::DocumentExporter;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub provider: ProviderClient,
    /// Pluggable HTML→PDF converter. Probed once at startup; when unavailable
    /// the export endpoint returns raw HTML instead.
    pub exporter: Arc<dyn DocumentExporter>,
}
