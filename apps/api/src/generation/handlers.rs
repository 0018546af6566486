//! Axum route handlers for content generation and improvement.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::generator::{generate_content, GeneratedContent, GenerationRequest};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    #[serde(default)]
    pub text: String,
    /// Which resume section the text belongs to. Accepted for forward
    /// compatibility; the current improvement pass does not use it.
    #[serde(default = "default_section")]
    pub section: String,
}

fn default_section() -> String {
    "summary".to_string()
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved: String,
}

/// POST /api/generate
///
/// Generates resume content for a role. 400 if `role` is missing or empty;
/// provider failures fall back to deterministic templates and still 200.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GeneratedContent>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("Role is required".to_string()));
    }

    let (content, source) = generate_content(&state.provider, &request).await;
    info!(
        "Generated content for role '{}' via {source:?} path",
        request.role
    );

    Ok(Json(content))
}

/// POST /api/improve
///
/// Intentional stub: prefixes the text with an `[Enhanced]` marker. Real
/// text improvement is pending product clarification; do not add logic here.
pub async fn handle_improve(
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    debug!("Improve requested for section '{}'", request.section);

    Ok(Json(ImproveResponse {
        improved: format!("[Enhanced] {}", request.text),
    }))
}
