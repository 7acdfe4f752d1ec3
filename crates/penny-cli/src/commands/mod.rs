//! Command implementations
//!
//! Argument parsing lives in `cli`; each submodule here implements the
//! commands for one area.

mod analysis;
mod reports;
mod serve;

pub use analysis::*;
pub use reports::*;
pub use serve::*;

use std::path::Path;

use anyhow::{Context, Result};

use penny_core::{config, demo, AppConfig, RecurringExpense, Transaction};

/// One immutable month of data, resolved from flags or demo defaults
pub struct MonthData {
    pub config: AppConfig,
    pub transactions: Vec<Transaction>,
    pub recurring: Vec<RecurringExpense>,
}

/// Resolve the month's data: explicit files when given, demo data otherwise.
///
/// A ledger file carries no recurring-expense list, so that section of the
/// dashboard is empty when one is supplied.
pub fn load_month(config_path: Option<&Path>, ledger_path: Option<&Path>) -> Result<MonthData> {
    let config = AppConfig::load(config_path).context("Failed to load budget config")?;

    let (transactions, recurring) = match ledger_path {
        Some(path) => {
            let txs = config::load_ledger(path).context("Failed to load ledger file")?;
            (txs, Vec::new())
        }
        None => {
            tracing::debug!("No ledger file given, using built-in demo ledger");
            (demo::demo_transactions(), demo::demo_recurring())
        }
    };

    Ok(MonthData {
        config,
        transactions,
        recurring,
    })
}
