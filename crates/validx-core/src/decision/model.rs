//! Decision banner models.

use serde::{Deserialize, Serialize};

/// Advisor recommendation as shown on the decision banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Go,
    NoGo,
    Conditional,
}

impl Recommendation {
    /// Classify free-text advisor output.
    ///
    /// Text that never mentions "go" is treated as conditional, as is any
    /// recommendation that says "conditional".
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();

        if !lowered.contains("go") {
            return Self::Conditional;
        }

        if lowered.contains("conditional") {
            Self::Conditional
        } else if lowered.contains("no-go") || lowered.contains("no go") {
            Self::NoGo
        } else {
            Self::Go
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::NoGo => "no-go",
            Self::Conditional => "conditional",
        }
    }
}

/// Final investor verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestorDecision {
    #[serde(rename = "INVEST")]
    Invest,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "NOT INVEST")]
    NotInvest,
}

impl InvestorDecision {
    /// Parse the API's verdict; anything unrecognized is a hold.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "INVEST" => Self::Invest,
            "NOT INVEST" => Self::NotInvest,
            _ => Self::Hold,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invest => "INVEST",
            Self::Hold => "HOLD",
            Self::NotInvest => "NOT INVEST",
        }
    }
}

/// Everything the investor banner displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorSummary {
    pub decision: InvestorDecision,
    /// 0-100.
    pub confidence: u8,
    pub reasoning: String,
    pub strengths: Option<String>,
    pub concerns: Option<String>,
    /// In thousands.
    pub suggested_investment: Option<f64>,
    pub expected_return: Option<String>,
}
