//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Penny - Plain-spoken spending and savings coach
#[derive(Parser)]
#[command(name = "penny")]
#[command(about = "Personal finance coaching engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Budget config file (TOML)
    ///
    /// Falls back to the built-in demo budget when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ledger file (JSON array of transactions)
    ///
    /// Falls back to the built-in demo ledger when omitted.
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the month summary
    Summary,

    /// Show expense totals by category
    Categories {
        /// Only the N largest categories
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show where savings stand against a target rate
    Target {
        /// Target savings rate as a percentage of income (defaults to the
        /// configured goal rate)
        percentage: Option<f64>,
    },

    /// Propose spending caps for discretionary categories
    Suggest,

    /// Check whether a purchase fits the month
    Afford {
        /// Purchase amount in dollars
        amount: f64,

        /// Savings floor to maintain (defaults to the configured goal)
        #[arg(long)]
        goal: Option<f64>,
    },

    /// Show the weekly average spend for a category
    Weekly {
        /// Category label, e.g. "Dining"
        category: String,
    },

    /// Project savings at month end
    Projection,

    /// Print the coach system prompt
    Prompt,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeat for several)
        #[arg(long)]
        allow_origin: Vec<String>,
    },
}
