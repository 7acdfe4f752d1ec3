//! Penny CLI - Spending and savings coach
//!
//! Usage:
//!   penny summary             Month summary over the demo ledger
//!   penny suggest             Propose discretionary spending caps
//!   penny afford 300          Check a $300 purchase against the goal
//!   penny serve --port 3000   Start the web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let month = commands::load_month(cli.config.as_deref(), cli.ledger.as_deref())?;

    match cli.command {
        Commands::Summary => commands::cmd_summary(&month),
        Commands::Categories { limit } => commands::cmd_categories(&month, limit),
        Commands::Target { percentage } => commands::cmd_target(&month, percentage),
        Commands::Suggest => commands::cmd_suggest(&month),
        Commands::Afford { amount, goal } => commands::cmd_afford(&month, amount, goal),
        Commands::Weekly { category } => commands::cmd_weekly(&month, &category),
        Commands::Projection => commands::cmd_projection(&month),
        Commands::Prompt => commands::cmd_prompt(&month),
        Commands::Serve {
            port,
            host,
            allow_origin,
        } => commands::cmd_serve(month, &host, port, allow_origin).await,
    }
}
