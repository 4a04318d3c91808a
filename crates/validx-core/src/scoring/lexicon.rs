//! Keyword lexicons used by the text scorers.
//!
//! All entries are lowercase; scorers lowercase the text before matching.

/// Market terms signalling opportunity.
pub const MARKET_POSITIVE: &[&str] = &[
    "opportunity",
    "growth",
    "potential",
    "demand",
    "large",
    "increasing",
    "strong",
];

/// Market terms signalling stability.
pub const MARKET_NEUTRAL: &[&str] = &["moderate", "stable", "average", "existing"];

/// Market terms signalling challenges.
pub const MARKET_NEGATIVE: &[&str] = &["limited", "small", "declining", "saturated", "challenging"];

/// Mentions of other players in the market.
pub const COMPETITOR_TERMS: &[&str] = &["competitor", "rival", "company", "player"];

/// Signals of incumbent strength.
pub const STRENGTH_TERMS: &[&str] = &["strong", "dominant", "leader", "established"];

/// Signals of openings left by incumbents.
pub const WEAKNESS_TERMS: &[&str] = &["weak", "gap", "opportunity", "niche"];

pub const RISK_MARKET: &[&str] = &["market risk", "demand", "customer", "adoption"];

pub const RISK_TECHNICAL: &[&str] = &["technical", "technology", "development", "infrastructure"];

pub const RISK_FINANCIAL: &[&str] = &["financial", "funding", "cost", "revenue", "budget"];

pub const RISK_OPERATIONAL: &[&str] = &["operational", "execution", "team", "resources"];

pub const RISK_REGULATORY: &[&str] = &["regulatory", "compliance", "legal", "regulation"];

/// Number of `words` that occur at least once in `lowered`.
///
/// `lowered` must already be lowercase. Repeated occurrences of the same word
/// count once.
pub fn count_present(lowered: &str, words: &[&str]) -> u32 {
    words.iter().filter(|w| lowered.contains(*w)).count() as u32
}
