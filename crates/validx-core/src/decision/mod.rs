//! Decision banners for the advisor recommendation and investor verdict.

pub mod model;

use crate::analysis::model::AnalysisResponse;
use model::{InvestorDecision, InvestorSummary, Recommendation};

/// Reasoning shown when the API gives none.
pub const DEFAULT_REASONING: &str = "Insufficient data for complete analysis";

/// Classify the advisor recommendation of a response.
pub fn recommendation(response: &AnalysisResponse) -> Recommendation {
    Recommendation::classify(response.advisor_recommendations.as_deref().unwrap_or(""))
}

/// Collect the investor banner, filling in defaults for missing fields.
pub fn investor_summary(response: &AnalysisResponse) -> InvestorSummary {
    let decision = response
        .investor_decision
        .as_deref()
        .map(InvestorDecision::parse)
        .unwrap_or(InvestorDecision::Hold);

    let reasoning = match response.investor_reasoning.as_deref() {
        Some(r) if !r.trim().is_empty() => r.to_string(),
        _ => DEFAULT_REASONING.to_string(),
    };

    InvestorSummary {
        decision,
        confidence: response.confidence(),
        reasoning,
        strengths: response.investor_strengths.clone(),
        concerns: response.investor_concerns.clone(),
        suggested_investment: response.suggested_investment,
        expected_return: response.expected_return.clone(),
    }
}

/// Format the banner line for a recommendation.
pub fn format_recommendation(response: &AnalysisResponse) -> String {
    let text = response.advisor_recommendations.as_deref().unwrap_or("").trim();
    if text.is_empty() {
        "Decision: N/A".to_string()
    } else {
        format!("Decision: {}", text)
    }
}
