//! Market analysis scoring.

use serde::{Deserialize, Serialize};

use super::lexicon::{count_present, MARKET_NEGATIVE, MARKET_NEUTRAL, MARKET_POSITIVE};
use super::round_half_up;

/// Market sentiment derived from the market analysis text.
///
/// The three percentages are independent shares of the keyword hits and do
/// not necessarily sum to 100. `score` is a net-sentiment index centred on 50
/// and is left unclamped; it ranges from 0 to 150.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketMetrics {
    pub opportunity: u32,
    pub stability: u32,
    pub challenges: u32,
    pub score: i32,
}

impl MarketMetrics {
    /// Score clamped to 0-100 for gauges.
    pub fn display_score(&self) -> i32 {
        self.score.clamp(0, 100)
    }
}

/// Score a market analysis.
pub fn score_market(text: &str) -> MarketMetrics {
    let lowered = text.to_lowercase();

    let positive = count_present(&lowered, MARKET_POSITIVE);
    let neutral = count_present(&lowered, MARKET_NEUTRAL);
    let negative = count_present(&lowered, MARKET_NEGATIVE);

    let total = match positive + neutral + negative {
        0 => 1.0,
        n => f64::from(n),
    };

    let share = |count: u32| round_half_up(f64::from(count) / total * 100.0) as u32;
    let net = f64::from(positive * 2 + neutral) - f64::from(negative);

    MarketMetrics {
        opportunity: share(positive),
        stability: share(neutral),
        challenges: share(negative),
        score: round_half_up(net / total * 50.0 + 50.0) as i32,
    }
}
