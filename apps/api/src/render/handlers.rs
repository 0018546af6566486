//! Axum route handlers for template listing and PDF export.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::render::templates::{render, TemplateFields, TemplateId, DEFAULT_TEMPLATE, TEMPLATE_NAMES};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(flatten)]
    pub fields: TemplateFields,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// POST /api/export/pdf
///
/// Renders the fields into the selected template and converts to PDF when a
/// converter is installed. Without one, the raw HTML is returned with a
/// `text/html` content type — callers must tolerate either shape.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let template = TemplateId::parse(&request.template);
    let html = render(template, &request.fields);

    if !state.exporter.is_available() {
        info!("No PDF converter installed; returning rendered HTML");
        return Ok((
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response());
    }

    let pdf = state
        .exporter
        .html_to_pdf(&html)
        .await
        .map_err(|e| AppError::Export(e.to_string()))?;

    let filename = format!("resume_{}.pdf", Utc::now().format("%Y%m%d"));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// GET /api/templates
pub async fn handle_list_templates() -> Json<Value> {
    Json(json!({
        "templates": TEMPLATE_NAMES,
        "default": DEFAULT_TEMPLATE,
    }))
}
