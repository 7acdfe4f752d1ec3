//! Report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use penny_core::{ledger, CategorySpending};

/// Query parameters for the categories report
#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    /// Return only the N largest categories
    pub limit: Option<usize>,
}

/// GET /api/reports/categories - Expense totals by category, largest first
pub async fn report_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoriesQuery>,
) -> Json<Vec<CategorySpending>> {
    let totals = match params.limit {
        Some(limit) => ledger::top_categories(&state.transactions, limit),
        None => ledger::category_totals(&state.transactions),
    };

    Json(totals)
}

/// Spending summary figures for the month
#[derive(Debug, Serialize)]
pub struct SpendingReport {
    pub total_income: f64,
    pub total_expenses: f64,
    pub current_savings: f64,
    pub discretionary_spending: f64,
}

/// GET /api/reports/spending - Month totals
pub async fn report_spending(State(state): State<Arc<AppState>>) -> Json<SpendingReport> {
    let txs = &state.transactions;

    Json(SpendingReport {
        total_income: ledger::total_income(txs),
        total_expenses: ledger::total_expenses(txs),
        current_savings: ledger::current_savings(txs),
        discretionary_spending: ledger::discretionary_spending(txs),
    })
}
