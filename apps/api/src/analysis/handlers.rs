//! Axum route handlers for ATS analysis and skill suggestions.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::ats::{analyze_ats, AtsReport};
use crate::analysis::skills::suggest_skills;
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillSuggestionRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub current_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillSuggestionResponse {
    pub suggestions: Vec<String>,
}

/// POST /api/analyze/ats
pub async fn handle_analyze_ats(
    Json(request): Json<AtsRequest>,
) -> Result<Json<AtsReport>, AppError> {
    Ok(Json(analyze_ats(&request.text, &request.job_description)))
}

/// POST /api/suggestions/skills
pub async fn handle_suggest_skills(
    Json(request): Json<SkillSuggestionRequest>,
) -> Result<Json<SkillSuggestionResponse>, AppError> {
    Ok(Json(SkillSuggestionResponse {
        suggestions: suggest_skills(&request.role, &request.current_skills),
    }))
}
