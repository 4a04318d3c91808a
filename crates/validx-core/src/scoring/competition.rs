//! Competition analysis scoring.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::lexicon::{COMPETITOR_TERMS, STRENGTH_TERMS, WEAKNESS_TERMS};

/// Lowest score a crowded market can reach.
pub const COMPETITION_SCORE_FLOOR: i32 = 20;

static COMPETITOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| term_pattern(COMPETITOR_TERMS));
static STRENGTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| term_pattern(STRENGTH_TERMS));
static WEAKNESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| term_pattern(WEAKNESS_TERMS));

/// Competitive pressure derived from the competition analysis text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionMetrics {
    pub intensity: u32,
    pub strength: u32,
    pub opportunities: u32,
    pub score: i32,
}

/// Score a competition analysis.
///
/// Unlike the market scorer every occurrence counts, so repeated mentions of
/// competitors keep lowering the score until it reaches the floor.
pub fn score_competition(text: &str) -> CompetitionMetrics {
    let competitors = count_matches(&COMPETITOR_PATTERN, text);
    let strength = count_matches(&STRENGTH_PATTERN, text);
    let weakness = count_matches(&WEAKNESS_PATTERN, text);

    CompetitionMetrics {
        intensity: capped(competitors, 15),
        strength: capped(strength, 20),
        opportunities: capped(weakness, 25),
        score: competition_score(competitors),
    }
}

/// Competition score for a number of competitor mentions.
pub fn competition_score(competitors: u64) -> i32 {
    let penalty = competitors.saturating_mul(10).min(100) as i32;
    (100 - penalty).max(COMPETITION_SCORE_FLOOR)
}

fn capped(count: u64, weight: u64) -> u32 {
    count.saturating_mul(weight).min(100) as u32
}

fn count_matches(pattern: &Regex, text: &str) -> u64 {
    pattern.find_iter(text).count() as u64
}

fn term_pattern(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("lexicon terms form a valid pattern")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text() {
        assert_eq!(
            score_competition(""),
            CompetitionMetrics { intensity: 0, strength: 0, opportunities: 0, score: 100 }
        );
    }

    #[test]
    fn test_counts_every_occurrence() {
        let text = "One competitor, another Competitor and a RIVAL company.";
        let metrics = score_competition(text);
        assert_eq!(metrics.intensity, 60);
        assert_eq!(metrics.score, 60);
    }

    #[test]
    fn test_caps_and_floor() {
        let text = "player ".repeat(12) + &"leader ".repeat(6) + &"niche ".repeat(5);
        let metrics = score_competition(&text);
        assert_eq!(metrics.intensity, 100);
        assert_eq!(metrics.strength, 100);
        assert_eq!(metrics.opportunities, 100);
        assert_eq!(metrics.score, COMPETITION_SCORE_FLOOR);
    }

    #[test]
    fn test_substring_matches_count() {
        // "weakness" contains "weak", "gaps" contains "gap"
        let metrics = score_competition("Their weakness leaves gaps.");
        assert_eq!(metrics.opportunities, 50);
        assert_eq!(metrics.intensity, 0);
    }

    #[test]
    fn test_competition_score_steps() {
        assert_eq!(competition_score(0), 100);
        assert_eq!(competition_score(3), 70);
        assert_eq!(competition_score(8), 20);
        assert_eq!(competition_score(u64::MAX), 20);
    }
}
