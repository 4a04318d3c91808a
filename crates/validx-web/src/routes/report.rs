//! Report route handlers.

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use validx_core::{ReportFormat, ValidationReport};

use super::error_response;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// `markdown` (default), `text` or `json`.
    pub format: Option<String>,
}

/// POST /api/report - Render the validation report for an analysis response.
pub async fn report(
    Query(query): Query<ReportQuery>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, (StatusCode, String)> {
    let format = ReportFormat::parse(query.format.as_deref().unwrap_or("markdown"))
        .map_err(error_response)?;
    let response = validx_core::analysis::from_value(body).map_err(error_response)?;
    let report = ValidationReport::new(&response, chrono::Utc::now());

    tracing::debug!(?format, overall = report.scores.overall_score, "Rendering report");

    let rendered = report.render(format).map_err(error_response)?;
    Ok(([(header::CONTENT_TYPE, format.content_type())], rendered).into_response())
}
