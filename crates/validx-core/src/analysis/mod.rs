//! Analysis payload loading.

pub mod model;

use std::path::Path;

use crate::error::{ValidxError, ValidxResult};
use model::AnalysisResponse;

/// Parse an analysis API response body.
///
/// The body must be a JSON object; unknown keys are ignored. Text sections
/// that are missing, `null` or not strings are left empty.
pub fn parse_response(body: &str) -> ValidxResult<AnalysisResponse> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    from_value(value)
}

/// Convert an already decoded JSON value into a response.
pub fn from_value(value: serde_json::Value) -> ValidxResult<AnalysisResponse> {
    if !value.is_object() {
        return Err(ValidxError::invalid_payload(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }

    let response = serde_json::from_value(value)?;
    Ok(response)
}

/// Read and parse an analysis response from a file.
pub fn load_response(path: &Path) -> ValidxResult<AnalysisResponse> {
    let body = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = body.len(), "Loaded analysis payload");
    parse_response(&body)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_fields_are_empty() {
        let body = r#"{"market_analysis": null, "risk_assessment": "Funding risk."}"#;
        let response = parse_response(body).unwrap();
        assert_eq!(response.market_text(), "");
        assert_eq!(response.competition_text(), "");
        assert_eq!(response.risk_text(), "Funding risk.");
    }

    #[test]
    fn test_non_string_sections_are_empty() {
        let body = r#"{
            "market_analysis": 42,
            "competition_analysis": ["Acme"],
            "advice": {"text": "Ship it"},
            "risk_assessment": "Funding risk."
        }"#;
        let response = parse_response(body).unwrap();
        assert_eq!(response.market_text(), "");
        assert_eq!(response.competition_text(), "");
        assert_eq!(response.advice, None);
        assert_eq!(response.risk_text(), "Funding risk.");

        let scored = crate::scoring::score_analysis(&response);
        assert_eq!(scored.risk.financial, 20);
        assert_eq!(scored.market.score, 50);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{"advice": "Ship it", "messages": [1, 2, 3]}"#;
        let response = parse_response(body).unwrap();
        assert_eq!(response.advice.as_deref(), Some("Ship it"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = parse_response("[1, 2]").unwrap_err();
        assert!(matches!(err, ValidxError::InvalidPayload(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        let err = from_value(serde_json::json!("market")).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = parse_response("{not json").unwrap_err();
        assert!(matches!(err, ValidxError::Json(_)));
    }

    #[test]
    fn test_nested_sections() {
        let body = r#"{
            "investor_confidence": 140,
            "competitor_intelligence": {
                "competitors": [{"name": "Acme", "market_share": 30.5}],
                "competitive_position": "Moderate"
            },
            "financial_viability": {"revenue_projections": [120, 480]}
        }"#;
        let response = parse_response(body).unwrap();
        assert_eq!(response.confidence(), 100);

        let intel = response.competitor_intelligence.unwrap();
        assert_eq!(intel.competitors.len(), 1);
        assert_eq!(intel.competitors[0].display_name(), "Acme");
        assert_eq!(intel.competitors[0].funding, None);

        let financial = response.financial_viability.unwrap();
        assert_eq!(financial.projections(), [120.0, 480.0, 0.0]);
        assert_eq!(financial.breakeven(), 24);
        assert_eq!(financial.score(), 50.0);
    }

    #[test]
    fn test_confidence_defaults() {
        let response = AnalysisResponse::default();
        assert_eq!(response.confidence(), 50);
        assert!(response.is_empty());
    }

    #[test]
    fn test_zero_confidence_kept() {
        let response = parse_response(r#"{"investor_confidence": 0}"#).unwrap();
        assert_eq!(response.confidence(), 0);

        let response = parse_response(r#"{"investor_confidence": null}"#).unwrap();
        assert_eq!(response.confidence(), 50);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_response(Path::new("/nonexistent/validx/analysis.json")).unwrap_err();
        assert!(matches!(err, ValidxError::Io(_)));
    }
}
