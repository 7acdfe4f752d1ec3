//! Dashboard handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use penny_core::{ledger, CategorySpending, MonthlyBudget, RecurringExpense};

/// Everything the dashboard page renders in one payload
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub budget: MonthlyBudget,
    pub total_income: f64,
    pub total_spending: f64,
    pub current_savings: f64,
    pub discretionary_spending: f64,
    pub top_categories: Vec<CategorySpending>,
    pub recurring: Vec<RecurringExpense>,
}

/// GET /api/dashboard - Month summary for the dashboard page
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    let txs = &state.transactions;

    Json(DashboardSummary {
        budget: state.budget,
        total_income: ledger::total_income(txs),
        total_spending: ledger::total_expenses(txs),
        current_savings: state.budget.income - ledger::total_expenses(txs),
        discretionary_spending: ledger::discretionary_spending(txs),
        top_categories: ledger::top_categories(txs, ledger::DEFAULT_TOP_CATEGORIES),
        recurring: state.recurring.clone(),
    })
}
