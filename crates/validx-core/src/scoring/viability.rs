//! Overall viability score and its colour bands.

use serde::{Deserialize, Serialize};

use super::competition::CompetitionMetrics;
use super::market::MarketMetrics;
use super::risk::RiskMetrics;
use super::round_half_up;

/// Lowest score shown as favorable.
pub const FAVORABLE_THRESHOLD: i32 = 70;

/// Lowest score shown as caution.
pub const CAUTION_THRESHOLD: i32 = 40;

/// Rounded mean of the three component scores.
pub fn overall_score(market: &MarketMetrics, competition: &CompetitionMetrics, risk: &RiskMetrics) -> i32 {
    let sum = market.score + competition.score + risk.score;
    round_half_up(f64::from(sum) / 3.0) as i32
}

/// Three-tier banding used by gauges and decision banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityBand {
    /// 70 and above.
    Favorable,
    /// 40 to 69.
    Caution,
    /// Below 40.
    Unfavorable,
}

impl ViabilityBand {
    pub fn from_score(score: i32) -> Self {
        if score >= FAVORABLE_THRESHOLD {
            Self::Favorable
        } else if score >= CAUTION_THRESHOLD {
            Self::Caution
        } else {
            Self::Unfavorable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Caution => "caution",
            Self::Unfavorable => "unfavorable",
        }
    }

    /// Hex colour the renderer paints the gauge with.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Favorable => "#10B981",
            Self::Caution => "#F59E0B",
            Self::Unfavorable => "#EF4444",
        }
    }
}
