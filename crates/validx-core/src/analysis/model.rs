//! Analysis payload models.
//!
//! Mirrors the JSON body returned by the Valid-X analysis API. Every field is
//! optional: `null` and missing keys both deserialize to `None` so that a
//! partial response still scores and renders.

use serde::{Deserialize, Deserializer, Serialize};

/// Confidence shown when the API omits one.
pub const DEFAULT_CONFIDENCE: u8 = 50;

/// Financial viability score shown when the API omits one.
pub const DEFAULT_VIABILITY_SCORE: f64 = 50.0;

/// Breakeven month shown when the API omits one.
pub const DEFAULT_BREAKEVEN_MONTH: u32 = 24;

/// Full response of one startup validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    #[serde(deserialize_with = "lenient_text")]
    pub startup_idea: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub market_analysis: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub competition_analysis: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub risk_assessment: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub advisor_recommendations: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub advice: Option<String>,
    pub investor_decision: Option<String>,
    pub investor_confidence: Option<f64>,
    pub investor_reasoning: Option<String>,
    pub investor_strengths: Option<String>,
    pub investor_concerns: Option<String>,
    pub suggested_investment: Option<f64>,
    pub expected_return: Option<String>,
    pub competitor_intelligence: Option<CompetitorIntelligence>,
    pub financial_viability: Option<FinancialViability>,
}

impl AnalysisResponse {
    /// Build a response carrying only the three analysis sections.
    pub fn from_sections(market: &str, competition: &str, risk: &str) -> Self {
        Self {
            market_analysis: Some(market.to_string()),
            competition_analysis: Some(competition.to_string()),
            risk_assessment: Some(risk.to_string()),
            ..Self::default()
        }
    }

    /// Market analysis text, empty when absent.
    pub fn market_text(&self) -> &str {
        self.market_analysis.as_deref().unwrap_or("")
    }

    /// Competition analysis text, empty when absent.
    pub fn competition_text(&self) -> &str {
        self.competition_analysis.as_deref().unwrap_or("")
    }

    /// Risk assessment text, empty when absent.
    pub fn risk_text(&self) -> &str {
        self.risk_assessment.as_deref().unwrap_or("")
    }

    /// Investor confidence clamped to 0-100, defaulting to 50.
    pub fn confidence(&self) -> u8 {
        match self.investor_confidence {
            Some(c) if c.is_finite() => c.round().clamp(0.0, 100.0) as u8,
            _ => DEFAULT_CONFIDENCE,
        }
    }

    /// True when none of the three analysis sections carries text.
    pub fn is_empty(&self) -> bool {
        [self.market_text(), self.competition_text(), self.risk_text()]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

/// Keep a JSON string, treat any other value as absent text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// Metrics for one competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorData {
    pub name: Option<String>,
    /// Market share percentage (0-100).
    pub market_share: Option<f64>,
    /// Funding raised, in millions.
    pub funding: Option<f64>,
    /// Annual growth rate percentage.
    pub growth_rate: Option<f64>,
    /// Brand visibility score (0-100).
    pub brand_visibility: Option<f64>,
}

impl CompetitorData {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => "Unknown",
        }
    }
}

/// Competitive landscape extracted by the analysis API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorIntelligence {
    pub competitors: Vec<CompetitorData>,
    /// Strong / Moderate / Weak.
    pub competitive_position: Option<String>,
    /// Fragmented / Moderate / Concentrated.
    pub market_concentration: Option<String>,
    pub competitive_advantage: Option<String>,
}

/// Revenue and cost projections extracted by the analysis API.
///
/// Money amounts are in thousands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialViability {
    /// Year 1, 2 and 3 revenue.
    pub revenue_projections: Vec<f64>,
    /// Monthly burn rate.
    pub burn_rate: Option<f64>,
    pub funding_needed: Option<f64>,
    pub breakeven_month: Option<u32>,
    pub gross_margin: Option<f64>,
    /// Cash runway in months.
    pub cash_runway: Option<u32>,
    pub viability_score: Option<f64>,
    pub cost_structure: Option<String>,
    pub revenue_model: Option<String>,
}

impl FinancialViability {
    /// Three-year revenue projection, padded with zeros.
    pub fn projections(&self) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (slot, value) in out.iter_mut().zip(&self.revenue_projections) {
            *slot = *value;
        }
        out
    }

    pub fn breakeven(&self) -> u32 {
        self.breakeven_month.unwrap_or(DEFAULT_BREAKEVEN_MONTH)
    }

    pub fn score(&self) -> f64 {
        self.viability_score.unwrap_or(DEFAULT_VIABILITY_SCORE)
    }
}
