//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use validx_core::AnalysisResponse;

pub mod report;
pub mod score;
pub mod serve;

/// Valid-X - Startup idea validation scoring
#[derive(Parser)]
#[command(name = "validx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, env = "VALIDX_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an analysis response
    Score(score::ScoreArgs),

    /// Generate a validation report
    Report(report::ReportArgs),

    /// Start the scoring web server
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Score(args) => score::execute(args).await,
            Commands::Report(args) => report::execute(args).await,
            Commands::Serve(args) => serve::execute(args).await,
        }
    }
}

/// Load an analysis response from a file, or stdin when `input` is `None` or `-`.
pub(crate) fn read_response(input: Option<&Path>) -> Result<AnalysisResponse> {
    match input {
        Some(path) if path != Path::new("-") => validx_core::analysis::load_response(path)
            .with_context(|| format!("Failed to load analysis from {}", path.display())),
        _ => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read analysis from stdin")?;
            validx_core::analysis::parse_response(&body)
                .context("Failed to parse analysis from stdin")
        }
    }
}
