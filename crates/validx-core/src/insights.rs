//! Short findings derived from the metrics.

use serde::{Deserialize, Serialize};

use crate::scoring::{CompetitionMetrics, MarketMetrics, RiskMetrics};

/// Findings grouped by section, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub market: Vec<String>,
    pub competition: Vec<String>,
    pub risk: Vec<String>,
}

impl Insights {
    /// Apply the threshold rules to a set of metrics.
    pub fn derive(market: &MarketMetrics, competition: &CompetitionMetrics, risk: &RiskMetrics) -> Self {
        Self {
            market: collect(&[
                (market.opportunity > 50, "Strong market opportunity identified"),
                (market.challenges > 40, "Significant market challenges present"),
                (market.score >= 70, "Favorable market conditions overall"),
            ]),
            competition: collect(&[
                (competition.intensity > 60, "High competition intensity detected"),
                (competition.opportunities > 50, "Market gaps and opportunities available"),
                (competition.score >= 60, "Competitive positioning is favorable"),
            ]),
            risk: collect(&[
                (risk.market > 50, "Market adoption risk requires attention"),
                (risk.financial > 50, "Financial risks need mitigation planning"),
                (risk.overall < 40, "Overall risk level is manageable"),
            ]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.market.is_empty() && self.competition.is_empty() && self.risk.is_empty()
    }
}

fn collect(rules: &[(bool, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, text)| text.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score_competition, score_market, score_risk};

    #[test]
    fn test_baseline_insights() {
        let insights = Insights::derive(&score_market(""), &score_competition(""), &score_risk(""));
        assert!(insights.market.is_empty());
        assert_eq!(insights.competition, vec!["Competitive positioning is favorable"]);
        assert_eq!(insights.risk, vec!["Overall risk level is manageable"]);
    }

    #[test]
    fn test_market_rules() {
        let market = score_market("Strong growth in a saturated market");
        // 2 positive, 1 negative: 67 / 33, score 100
        let insights = Insights::derive(&market, &score_competition(""), &score_risk(""));
        assert_eq!(
            insights.market,
            vec!["Strong market opportunity identified", "Favorable market conditions overall"]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let market = MarketMetrics { opportunity: 50, stability: 0, challenges: 40, score: 69 };
        let competition = CompetitionMetrics { intensity: 60, strength: 0, opportunities: 50, score: 59 };
        let risk = RiskMetrics {
            market: 50,
            technical: 0,
            financial: 50,
            operational: 0,
            regulatory: 0,
            overall: 40,
            score: 60,
        };
        assert!(Insights::derive(&market, &competition, &risk).is_empty());
    }

    #[test]
    fn test_risk_rules() {
        let risk = score_risk("customer adoption and demand; funding, cost and revenue");
        let insights = Insights::derive(&score_market(""), &score_competition(""), &risk);
        assert_eq!(
            insights.risk,
            vec![
                "Market adoption risk requires attention",
                "Financial risks need mitigation planning",
                "Overall risk level is manageable",
            ]
        );
    }
}
