//! Risk assessment scoring.

use serde::{Deserialize, Serialize};

use super::lexicon::{
    count_present, RISK_FINANCIAL, RISK_MARKET, RISK_OPERATIONAL, RISK_REGULATORY, RISK_TECHNICAL,
};
use super::round_half_up;

/// Highest value a single risk category can reach.
pub const RISK_CATEGORY_CAP: u32 = 80;

/// Risk categories tracked by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Market,
    Technical,
    Financial,
    Operational,
    Regulatory,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        Self::Market,
        Self::Technical,
        Self::Financial,
        Self::Operational,
        Self::Regulatory,
    ];

    /// Keywords that signal this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Market => RISK_MARKET,
            Self::Technical => RISK_TECHNICAL,
            Self::Financial => RISK_FINANCIAL,
            Self::Operational => RISK_OPERATIONAL,
            Self::Regulatory => RISK_REGULATORY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Technical => "technical",
            Self::Financial => "financial",
            Self::Operational => "operational",
            Self::Regulatory => "regulatory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Technical => "Technical",
            Self::Financial => "Financial",
            Self::Operational => "Operational",
            Self::Regulatory => "Regulatory",
        }
    }
}

/// Per-category risk levels and the resulting viability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub market: u32,
    pub technical: u32,
    pub financial: u32,
    pub operational: u32,
    pub regulatory: u32,
    /// Rounded mean of the five categories.
    pub overall: u32,
    /// `100 - overall`.
    pub score: i32,
}

impl RiskMetrics {
    /// Risk level of one category.
    pub fn get(&self, category: RiskCategory) -> u32 {
        match category {
            RiskCategory::Market => self.market,
            RiskCategory::Technical => self.technical,
            RiskCategory::Financial => self.financial,
            RiskCategory::Operational => self.operational,
            RiskCategory::Regulatory => self.regulatory,
        }
    }
}

/// Score a risk assessment.
pub fn score_risk(text: &str) -> RiskMetrics {
    let lowered = text.to_lowercase();
    let level = |category: RiskCategory| {
        (count_present(&lowered, category.keywords()) * 20).min(RISK_CATEGORY_CAP)
    };

    let market = level(RiskCategory::Market);
    let technical = level(RiskCategory::Technical);
    let financial = level(RiskCategory::Financial);
    let operational = level(RiskCategory::Operational);
    let regulatory = level(RiskCategory::Regulatory);

    let sum = market + technical + financial + operational + regulatory;
    let overall = round_half_up(f64::from(sum) / RiskCategory::ALL.len() as f64) as u32;

    RiskMetrics {
        market,
        technical,
        financial,
        operational,
        regulatory,
        overall,
        score: 100 - overall as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text() {
        assert_eq!(
            score_risk(""),
            RiskMetrics {
                market: 0,
                technical: 0,
                financial: 0,
                operational: 0,
                regulatory: 0,
                overall: 0,
                score: 100,
            }
        );
    }

    #[test]
    fn test_categories() {
        let text = "Funding and revenue are uncertain. The team lacks execution history. \
                    Regulatory compliance is required.";
        let metrics = score_risk(text);
        assert_eq!(metrics.market, 0);
        assert_eq!(metrics.technical, 0);
        assert_eq!(metrics.financial, 40);
        assert_eq!(metrics.operational, 40);
        assert_eq!(metrics.regulatory, 40);
        assert_eq!(metrics.overall, 24);
        assert_eq!(metrics.score, 76);
    }

    #[test]
    fn test_category_cap() {
        let text = "financial funding cost revenue budget";
        let metrics = score_risk(text);
        assert_eq!(metrics.financial, RISK_CATEGORY_CAP);
        assert_eq!(metrics.overall, 16);
    }

    #[test]
    fn test_repeats_count_once() {
        assert_eq!(score_risk("legal"), score_risk("legal legal LEGAL"));
    }

    #[test]
    fn test_multi_word_keyword() {
        assert_eq!(score_risk("Market risk is high").market, 20);
        assert_eq!(score_risk("Market is risky").market, 0);
    }

    #[test]
    fn test_get_by_category() {
        let metrics = score_risk("technology infrastructure");
        assert_eq!(metrics.get(RiskCategory::Technical), 40);
        assert_eq!(RiskCategory::Technical.as_str(), "technical");
    }
}
