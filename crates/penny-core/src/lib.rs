//! Penny Core Library
//!
//! Shared functionality for the Penny finance coach:
//! - Domain models (transactions, categories, monthly budget)
//! - Ledger aggregation (totals, category grouping, discretionary subtotal)
//! - Budget analysis (savings targets, cut suggestions, affordability checks)
//! - Month-end savings projection
//! - Budget configuration with embedded defaults
//! - Coach prompt context assembly

pub mod analyzer;
pub mod coach;
pub mod config;
pub mod demo;
pub mod error;
pub mod ledger;
pub mod models;
pub mod projection;

pub use analyzer::{AffordabilityVerdict, CutSuggestion, SavingsTarget};
pub use coach::CoachContext;
pub use config::{AppConfig, Goals};
pub use error::{Error, Result};
pub use models::{
    Category, CategorySpending, MonthlyBudget, RecurringExpense, Transaction, TransactionKind,
};
pub use projection::MonthEndProjection;
