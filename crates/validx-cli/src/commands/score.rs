//! Score command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct ScoreArgs {
    /// Analysis response JSON file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Print metrics as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: ScoreArgs) -> Result<()> {
    let response = super::read_response(args.input.as_deref())?;

    if response.is_empty() {
        tracing::warn!("Analysis has no market, competition or risk text; scores are baseline");
    }

    let scored = validx_core::score_analysis(&response);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        output::print_scored(&scored);
    }

    Ok(())
}
