//! Text metrics scoring.
//!
//! Turns the three free-text sections of an analysis (market, competition,
//! risk) into bounded numeric metrics using fixed keyword lexicons. Every
//! scorer is a pure, total function: empty or missing text yields the
//! neutral baseline and nothing here can fail.

pub mod competition;
pub mod lexicon;
pub mod market;
pub mod risk;
pub mod viability;

use serde::{Deserialize, Serialize};

use crate::analysis::model::AnalysisResponse;
use crate::insights::Insights;

pub use competition::{score_competition, CompetitionMetrics};
pub use market::{score_market, MarketMetrics};
pub use risk::{score_risk, RiskCategory, RiskMetrics};
pub use viability::{overall_score, ViabilityBand};

/// All metrics derived from one analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnalysis {
    pub market: MarketMetrics,
    pub competition: CompetitionMetrics,
    pub risk: RiskMetrics,
    pub overall_score: i32,
    pub band: ViabilityBand,
    pub insights: Insights,
}

impl ScoredAnalysis {
    /// Aggregate already computed component metrics.
    pub fn from_metrics(market: MarketMetrics, competition: CompetitionMetrics, risk: RiskMetrics) -> Self {
        let overall_score = overall_score(&market, &competition, &risk);
        Self {
            market,
            competition,
            risk,
            overall_score,
            band: ViabilityBand::from_score(overall_score),
            insights: Insights::derive(&market, &competition, &risk),
        }
    }

    /// Overall score clamped to 0-100 for gauges and printed reports.
    pub fn display_overall(&self) -> i32 {
        self.overall_score.clamp(0, 100)
    }
}

/// Score the three sections of a response.
pub fn score_analysis(response: &AnalysisResponse) -> ScoredAnalysis {
    score_sections(response.market_text(), response.competition_text(), response.risk_text())
}

/// Score raw market, competition and risk text.
pub fn score_sections(market: &str, competition: &str, risk: &str) -> ScoredAnalysis {
    let scored = ScoredAnalysis::from_metrics(
        score_market(market),
        score_competition(competition),
        score_risk(risk),
    );

    tracing::debug!(
        market = scored.market.score,
        competition = scored.competition.score,
        risk = scored.risk.score,
        overall = scored.overall_score,
        band = scored.band.as_str(),
        "Scored analysis"
    );

    scored
}

/// Round half up, matching how the renderer rounds percentages.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
