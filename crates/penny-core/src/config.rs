//! Budget configuration
//!
//! Config is resolved in two layers:
//! 1. An explicit TOML file passed on the command line
//! 2. Embedded defaults matching the demo budget (compiled into binary)
//!
//! The ledger itself is loaded separately, either from the built-in demo
//! data or from a JSON file supplied by the caller.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::analyzer::DEFAULT_SAVINGS_GOAL;
use crate::error::{Error, Result};
use crate::models::{MonthlyBudget, Transaction};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/budget.toml");

/// Budget and goal configuration for a run of the engine
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AppConfig {
    pub budget: MonthlyBudget,
    #[serde(default)]
    pub goals: Goals,
}

/// Savings goals used when the caller does not override them per request
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Goals {
    /// Dollar savings floor for affordability checks
    pub savings_goal: f64,
    /// Target savings rate as a percentage of income
    pub target_rate: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            savings_goal: DEFAULT_SAVINGS_GOAL,
            target_rate: 20.0,
        }
    }
}

impl AppConfig {
    /// Load configuration: the given file if present, embedded defaults
    /// otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::embedded()),
        }
    }

    /// The embedded default configuration.
    pub fn embedded() -> Self {
        // Validated by tests; cannot fail at runtime.
        toml::from_str(DEFAULT_CONFIG).expect("embedded config is valid")
    }

    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&raw)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded budget config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.budget.income <= 0.0 {
            return Err(Error::InvalidData(
                "budget income must be positive".to_string(),
            ));
        }
        if self.goals.savings_goal < 0.0 {
            return Err(Error::InvalidData(
                "savings goal must not be negative".to_string(),
            ));
        }
        if !(1.0..=100.0).contains(&self.goals.target_rate) {
            return Err(Error::InvalidData(
                "target rate must be between 1 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load a transaction ledger from a JSON file.
///
/// The file holds an array of transactions in the API's wire shape.
pub fn load_ledger(path: &Path) -> Result<Vec<Transaction>> {
    let raw = fs::read_to_string(path)?;
    let transactions: Vec<Transaction> = serde_json::from_str(&raw)?;

    tracing::debug!(
        path = %path.display(),
        count = transactions.len(),
        "Loaded ledger file"
    );
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::embedded();
        assert_eq!(config.budget.income, 5000.0);
        assert_eq!(config.budget.fixed, 2200.0);
        assert_eq!(config.goals.savings_goal, 1000.0);
        assert_eq!(config.goals.target_rate, 20.0);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[budget]
income = 6200.0
fixed = 2500.0
essentials = 900.0
discretionary = 1800.0

[goals]
savings_goal = 1500.0
target_rate = 25.0
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.budget.income, 6200.0);
        assert_eq!(config.goals.savings_goal, 1500.0);
    }

    #[test]
    fn test_config_goals_default_when_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[budget]
income = 4000.0
fixed = 1800.0
essentials = 700.0
discretionary = 1500.0
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.goals.savings_goal, 1000.0);
        assert_eq!(config.goals.target_rate, 20.0);
    }

    #[test]
    fn test_config_rejects_bad_figures() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[budget]
income = 0.0
fixed = 1800.0
essentials = 700.0
discretionary = 1500.0
"#
        )
        .unwrap();

        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_load_ledger_roundtrip() {
        let txs = crate::demo::demo_transactions();
        let json = serde_json::to_string(&txs).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_ledger(file.path()).unwrap();
        assert_eq!(loaded.len(), txs.len());
        assert_eq!(loaded[0].id, "1");
        assert_eq!(loaded[10].category, crate::models::Category::Dining);
    }

    #[test]
    fn test_load_ledger_missing_file() {
        assert!(matches!(
            load_ledger(Path::new("/nonexistent/ledger.json")),
            Err(Error::Io(_))
        ));
    }
}
