use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service status along with the configured AI provider and whether
/// it is actually usable (a key is present).
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "ai_provider": state.config.provider.as_str(),
        "ai_available": state.provider.is_available(),
    }))
}
