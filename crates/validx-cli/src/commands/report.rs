//! Report command.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use validx_core::{ReportFormat, ValidationReport};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Markdown,
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => ReportFormat::Markdown,
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Args)]
pub struct ReportArgs {
    /// Analysis response JSON file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    pub format: FormatArg,
}

pub async fn execute(args: ReportArgs) -> Result<()> {
    let response = super::read_response(args.input.as_deref())?;
    let report = ValidationReport::new(&response, chrono::Utc::now());

    let rendered = report.render(args.format.into())?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Report written");
            println!(
                "{} Report written to {}",
                "✓".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
