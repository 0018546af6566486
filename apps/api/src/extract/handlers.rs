//! Axum route handler for document extraction.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_content;
use crate::extract::heuristics::ExtractedProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub content: String,
}

/// POST /api/extract
///
/// Best-effort extraction of structured fields from raw resume text.
/// 400 if `content` is missing or empty; otherwise always 200 — fields that
/// cannot be located come back empty.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractedProfile>, AppError> {
    if request.content.is_empty() {
        return Err(AppError::Validation("No content provided".to_string()));
    }

    let (profile, source) = extract_content(&state.provider, &request.content).await;
    info!(
        "Extracted profile via {source:?} path ({} chars in)",
        request.content.len()
    );

    Ok(Json(profile))
}
