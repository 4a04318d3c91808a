//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use validx_core::{ScoredAnalysis, ViabilityBand};
use validx_core::scoring::RiskCategory;

/// Print scored metrics with banded colours.
pub fn print_scored(scored: &ScoredAnalysis) {
    println!("{}", "Viability Score".bold());
    println!("{}", "─".repeat(44));
    println!(
        "  Overall:     {} {}",
        banded(&format!("{:>3}", scored.display_overall()), scored.band).bold(),
        format!("({})", scored.band.as_str()).dimmed()
    );
    println!("{}", "─".repeat(44));

    println!();
    println!("{}", "Market".bold());
    println!("  Opportunity: {:>3}%", scored.market.opportunity);
    println!("  Stability:   {:>3}%", scored.market.stability);
    println!("  Challenges:  {:>3}%", scored.market.challenges);
    print_score_line(scored.market.score);
    if scored.market.score != scored.market.display_score() {
        println!("  {}", format!("(gauge shows {})", scored.market.display_score()).dimmed());
    }

    println!();
    println!("{}", "Competition".bold());
    println!("  Intensity:   {:>3}%", scored.competition.intensity);
    println!("  Strength:    {:>3}%", scored.competition.strength);
    println!("  Openings:    {:>3}%", scored.competition.opportunities);
    print_score_line(scored.competition.score);

    println!();
    println!("{}", "Risk".bold());
    for category in RiskCategory::ALL {
        let value = scored.risk.get(category);
        println!("  {:<12} {:>3}% {}", format!("{}:", category.label()), value, gauge(value as i32).dimmed());
    }
    println!("  Overall:     {:>3}%", scored.risk.overall);
    print_score_line(scored.risk.score);

    let insights = scored
        .insights
        .market
        .iter()
        .chain(&scored.insights.competition)
        .chain(&scored.insights.risk)
        .collect::<Vec<_>>();

    if !insights.is_empty() {
        println!();
        println!("{}", "Insights".bold());
        for insight in insights {
            println!("  - {}", insight);
        }
    }
}

fn print_score_line(score: i32) {
    let band = ViabilityBand::from_score(score);
    println!("  Score:       {}", banded(&format!("{:>3}", score), band));
}

/// Colour text by viability band.
fn banded(text: &str, band: ViabilityBand) -> ColoredString {
    match band {
        ViabilityBand::Favorable => text.green(),
        ViabilityBand::Caution => text.yellow(),
        ViabilityBand::Unfavorable => text.red(),
    }
}

/// Ten-cell gauge for a 0-100 value.
fn gauge(value: i32) -> String {
    let filled = (value.clamp(0, 100) / 10) as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(10 - filled))
}
