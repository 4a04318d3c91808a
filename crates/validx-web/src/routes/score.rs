//! Scoring route handlers.

use axum::{http::StatusCode, Json};
use validx_core::ScoredAnalysis;

use super::error_response;

/// POST /api/score - Score an analysis API response.
pub async fn score(
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ScoredAnalysis>, (StatusCode, String)> {
    let response = validx_core::analysis::from_value(body).map_err(error_response)?;
    let scored = validx_core::score_analysis(&response);

    tracing::info!(
        overall = scored.overall_score,
        band = scored.band.as_str(),
        "Scored analysis"
    );

    Ok(Json(scored))
}
