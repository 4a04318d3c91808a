//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use validx_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "VALIDX_PORT", default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "VALIDX_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = validx_web::state::DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        max_body_bytes: args.max_body_bytes,
    };

    println!();
    println!("  {} {}", "Valid-X".cyan().bold(), "Scoring Server".bold());
    println!();
    println!("  {}     http://{}/health", "Health".green(), config.bind_addr());
    println!("  {}      http://{}/api/score", "Score".green(), config.bind_addr());
    println!("  {}     http://{}/api/report", "Report".green(), config.bind_addr());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    validx_web::run_server(config).await?;

    Ok(())
}
