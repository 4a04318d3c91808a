//! Valid-X Core Library
//!
//! Turns the free-text sections of a startup analysis into metrics, insights,
//! decision banners and a downloadable report.

pub mod analysis;
pub mod decision;
pub mod error;
pub mod insights;
pub mod report;
pub mod scoring;

pub use analysis::model::AnalysisResponse;
pub use error::{ValidxError, ValidxResult};
pub use report::{ReportFormat, ValidationReport};
pub use scoring::{
    score_analysis, score_competition, score_market, score_risk, score_sections, CompetitionMetrics,
    MarketMetrics, RiskMetrics, ScoredAnalysis, ViabilityBand,
};
