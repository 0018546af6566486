pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::extract;
use crate::generation;
use crate::render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content generation
        .route("/api/generate", post(generation::handlers::handle_generate))
        .route("/api/improve", post(generation::handlers::handle_improve))
        // Templates and export
        .route("/api/templates", get(render::handlers::handle_list_templates))
        .route("/api/export/pdf", post(render::handlers::handle_export_pdf))
        // Analysis
        .route(
            "/api/suggestions/skills",
            post(analysis::handlers::handle_suggest_skills),
        )
        .route(
            "/api/analyze/ats",
            post(analysis::handlers::handle_analyze_ats),
        )
        // Extraction
        .route("/api/extract", post(extract::handlers::handle_extract))
        .with_state(state)
}
