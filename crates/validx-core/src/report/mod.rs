//! Startup validation reports.
//!
//! Assembles the analysis text, the computed metrics and the investor
//! verdict into one document, rendered either as Markdown (the downloadable
//! report) or as a compact terminal summary.

pub mod format;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::model::{AnalysisResponse, CompetitorIntelligence, FinancialViability};
use crate::decision::model::{InvestorSummary, Recommendation};
use crate::decision::{format_recommendation, investor_summary, recommendation};
use crate::error::{ValidxError, ValidxResult};
use crate::scoring::{score_analysis, RiskCategory, ScoredAnalysis};

use format::paragraphs;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Text,
    Json,
}

impl ReportFormat {
    /// Parse a format name; `md` is accepted for Markdown.
    pub fn parse(s: &str) -> ValidxResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ValidxError::validation(format!("Unknown report format: {}", other))),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }
}

/// Full validation report.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub generated_at: DateTime<Utc>,
    pub startup_idea: String,
    pub recommendation: Recommendation,
    pub recommendation_line: String,
    pub advice: String,
    pub market_analysis: String,
    pub competition_analysis: String,
    pub risk_assessment: String,
    pub scores: ScoredAnalysis,
    pub investor: InvestorSummary,
    pub competitor_intelligence: Option<CompetitorIntelligence>,
    pub financial_viability: Option<FinancialViability>,
}

impl ValidationReport {
    /// Build a report from an analysis response.
    pub fn new(response: &AnalysisResponse, generated_at: DateTime<Utc>) -> Self {
        let scores = score_analysis(response);

        Self {
            generated_at,
            startup_idea: or_placeholder(&response.startup_idea, "No idea provided"),
            recommendation: recommendation(response),
            recommendation_line: format_recommendation(response),
            advice: or_placeholder(&response.advice, "No advice available"),
            market_analysis: or_placeholder(&response.market_analysis, "No market analysis available"),
            competition_analysis: or_placeholder(
                &response.competition_analysis,
                "No competition analysis available",
            ),
            risk_assessment: or_placeholder(&response.risk_assessment, "No risk assessment available"),
            scores,
            investor: investor_summary(response),
            competitor_intelligence: response.competitor_intelligence.clone(),
            financial_viability: response.financial_viability.clone(),
        }
    }

    /// Render the report as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let s = &self.scores;

        out.push_str("# Valid-X Startup Validation Report\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            self.generated_at.format("%b %-d, %Y %H:%M UTC")
        ));
        out.push_str(&format!("**{}**\n\n", self.recommendation_line));

        out.push_str("## 1. Startup Idea\n\n");
        push_paragraphs(&mut out, &self.startup_idea);

        out.push_str("## 2. Strategic Advice\n\n");
        push_paragraphs(&mut out, &self.advice);

        out.push_str("## 3. Market Analysis\n\n");
        push_table(
            &mut out,
            &[
                ("Opportunity", format!("{}%", s.market.opportunity)),
                ("Stability", format!("{}%", s.market.stability)),
                ("Challenges", format!("{}%", s.market.challenges)),
                ("Market score", format!("{}%", s.market.display_score())),
            ],
        );
        push_bullets(&mut out, &s.insights.market);
        push_paragraphs(&mut out, &self.market_analysis);

        out.push_str("## 4. Competition Analysis\n\n");
        push_table(
            &mut out,
            &[
                ("Intensity", format!("{}%", s.competition.intensity)),
                ("Incumbent strength", format!("{}%", s.competition.strength)),
                ("Opportunities", format!("{}%", s.competition.opportunities)),
                ("Competition score", format!("{}%", s.competition.score)),
            ],
        );
        push_bullets(&mut out, &s.insights.competition);
        push_paragraphs(&mut out, &self.competition_analysis);

        out.push_str("## 5. Risk Assessment\n\n");
        let mut rows: Vec<(&str, String)> = RiskCategory::ALL
            .iter()
            .map(|c| (c.label(), format!("{}%", s.risk.get(*c))))
            .collect();
        rows.push(("Overall risk", format!("{}%", s.risk.overall)));
        push_table(&mut out, &rows);
        push_bullets(&mut out, &s.insights.risk);
        push_paragraphs(&mut out, &self.risk_assessment);

        out.push_str("## 6. Overall Viability Score\n\n");
        out.push_str(&format!(
            "**{}** / 100 ({})\n\n",
            s.display_overall(),
            s.band.as_str()
        ));
        out.push_str("| Category | Score |\n|---|---|\n");
        out.push_str(&format!("| Market Analysis | {}% |\n", s.market.display_score()));
        out.push_str(&format!("| Competition Analysis | {}% |\n", s.competition.score));
        out.push_str(&format!("| Risk Assessment | {}% |\n\n", s.risk.score));

        out.push_str("## 7. Investor Decision\n\n");
        self.push_investor(&mut out);

        if let Some(intel) = &self.competitor_intelligence {
            push_competitors(&mut out, intel);
        }

        if let Some(financial) = &self.financial_viability {
            push_financials(&mut out, financial);
        }

        out
    }

    /// Render the report in the given format.
    pub fn render(&self, format: ReportFormat) -> ValidxResult<String> {
        match format {
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Text => Ok(self.to_display_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Format the report as a human-readable terminal summary.
    pub fn to_display_string(&self) -> String {
        let s = &self.scores;
        let mut output = String::new();

        output.push_str("Valid-X Validation Report\n");
        output.push_str(&format!("{}\n", "─".repeat(50)));
        output.push_str(&format!("{}\n", self.recommendation_line));
        output.push_str(&format!(
            "Investor:          {} ({}% confidence)\n",
            self.investor.decision.as_str(),
            self.investor.confidence
        ));
        output.push_str(&format!(
            "Viability score:   {:>3} ({})\n",
            s.display_overall(),
            s.band.as_str()
        ));
        output.push_str(&format!("{}\n\n", "─".repeat(50)));

        output.push_str("Component scores:\n");
        for (label, value) in [
            ("Market", s.market.display_score()),
            ("Competition", s.competition.score),
            ("Risk", s.risk.score),
        ] {
            output.push_str(&format!("  {:<12} {:>3} {}\n", label, value, bar(value)));
        }

        output.push_str("\nRisk by category:\n");
        for category in RiskCategory::ALL {
            let value = s.risk.get(category) as i32;
            output.push_str(&format!("  {:<12} {:>3} {}\n", category.label(), value, bar(value)));
        }

        if !s.insights.is_empty() {
            output.push_str("\nInsights:\n");
            let all = s
                .insights
                .market
                .iter()
                .chain(&s.insights.competition)
                .chain(&s.insights.risk);
            for insight in all {
                output.push_str(&format!("  - {}\n", insight));
            }
        }

        output
    }

    fn push_investor(&self, out: &mut String) {
        let inv = &self.investor;
        out.push_str(&format!(
            "**{}** (confidence {}%)\n\n",
            inv.decision.as_str(),
            inv.confidence
        ));
        push_paragraphs(out, &inv.reasoning);

        if let Some(strengths) = non_empty(&inv.strengths) {
            out.push_str(&format!("**Key strengths:** {}\n\n", strengths));
        }
        if let Some(concerns) = non_empty(&inv.concerns) {
            out.push_str(&format!("**Key concerns:** {}\n\n", concerns));
        }
        if let Some(amount) = inv.suggested_investment.filter(|a| *a > 0.0) {
            out.push_str(&format!("**Suggested investment:** ${}K\n\n", amount_str(amount)));
        }
        if let Some(expected) = non_empty(&inv.expected_return) {
            out.push_str(&format!("**Expected return:** {}\n\n", expected));
        }
    }
}

fn push_competitors(out: &mut String, intel: &CompetitorIntelligence) {
    out.push_str("### Competitor Intelligence\n\n");

    if intel.competitors.is_empty() {
        out.push_str("No competitor data available\n\n");
        return;
    }

    out.push_str("| Competitor | Market share | Funding | Growth | Visibility |\n");
    out.push_str("|---|---|---|---|---|\n");
    for comp in &intel.competitors {
        out.push_str(&format!(
            "| {} | {}% | ${}M | {}% | {} |\n",
            comp.display_name(),
            amount_str(comp.market_share.unwrap_or(0.0)),
            amount_str(comp.funding.unwrap_or(0.0)),
            amount_str(comp.growth_rate.unwrap_or(0.0)),
            amount_str(comp.brand_visibility.unwrap_or(0.0)),
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "- **Position:** {}\n- **Market Structure:** {}\n- **Key Advantage:** {}\n\n",
        non_empty(&intel.competitive_position).unwrap_or("Unknown"),
        non_empty(&intel.market_concentration).unwrap_or("Unknown"),
        non_empty(&intel.competitive_advantage).unwrap_or("Not identified"),
    ));
}

fn push_financials(out: &mut String, financial: &FinancialViability) {
    out.push_str("### Financial Viability\n\n");

    let [y1, y2, y3] = financial.projections();
    let mut rows = vec![
        ("Year 1 revenue", format!("${}K", amount_str(y1))),
        ("Year 2 revenue", format!("${}K", amount_str(y2))),
        ("Year 3 revenue", format!("${}K", amount_str(y3))),
        ("Monthly burn rate", format!("${}K", amount_str(financial.burn_rate.unwrap_or(0.0)))),
        ("Funding needed", format!("${}K", amount_str(financial.funding_needed.unwrap_or(0.0)))),
        ("Breakeven", format!("month {}", financial.breakeven())),
    ];
    if let Some(margin) = financial.gross_margin {
        rows.push(("Gross margin", format!("{}%", amount_str(margin))));
    }
    if let Some(runway) = financial.cash_runway {
        rows.push(("Cash runway", format!("{} months", runway)));
    }
    rows.push(("Viability score", amount_str(financial.score())));
    push_table(out, &rows);

    if let Some(model) = non_empty(&financial.revenue_model) {
        out.push_str(&format!("**Revenue model:** {}\n\n", model));
    }
    if let Some(costs) = non_empty(&financial.cost_structure) {
        out.push_str(&format!("**Cost structure:** {}\n\n", costs));
    }
}

fn push_paragraphs(out: &mut String, text: &str) {
    for paragraph in paragraphs(text) {
        out.push_str(&paragraph);
        out.push_str("\n\n");
    }
}

fn push_bullets(out: &mut String, items: &[String]) {
    if items.is_empty() {
        return;
    }
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
    out.push('\n');
}

fn push_table(out: &mut String, rows: &[(&str, String)]) {
    out.push_str("| Metric | Value |\n|---|---|\n");
    for (label, value) in rows {
        out.push_str(&format!("| {} | {} |\n", label, value));
    }
    out.push('\n');
}

/// Twenty-cell bar for a 0-100 value.
fn bar(value: i32) -> String {
    let filled = (value.clamp(0, 100) / 5) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

fn amount_str(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    non_empty(value).unwrap_or(placeholder).to_string()
}
