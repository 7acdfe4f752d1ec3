//! Analysis handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use penny_core::{
    analyzer, ledger, projection, AffordabilityVerdict, Category, CutSuggestion,
    MonthEndProjection, SavingsTarget,
};

/// Query parameters for the savings target
#[derive(Debug, Deserialize)]
pub struct SavingsTargetQuery {
    /// Target savings rate as a percentage of income (defaults to the
    /// configured goal rate)
    pub percentage: Option<f64>,
}

/// GET /api/analysis/savings-target - Gap to a target savings rate
pub async fn savings_target(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SavingsTargetQuery>,
) -> Result<Json<SavingsTarget>, AppError> {
    let percentage = params.percentage.unwrap_or(state.goals.target_rate);
    if !(1.0..=100.0).contains(&percentage) {
        return Err(AppError::bad_request(
            "Percentage must be between 1 and 100",
        ));
    }

    Ok(Json(analyzer::savings_target(
        &state.budget,
        &state.transactions,
        percentage,
    )))
}

/// GET /api/analysis/suggestions - Proposed category caps
pub async fn cut_suggestions(State(state): State<Arc<AppState>>) -> Json<Vec<CutSuggestion>> {
    let totals = ledger::category_totals(&state.transactions);
    Json(analyzer::generate_cut_suggestions(&totals))
}

/// Request body for an affordability check
#[derive(Debug, Deserialize)]
pub struct AffordabilityRequest {
    /// Purchase amount in dollars
    pub amount: f64,
    /// Savings floor to maintain (defaults to the configured goal)
    pub savings_goal: Option<f64>,
}

/// POST /api/analysis/affordability - Can this purchase fit the month?
pub async fn check_affordability(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AffordabilityRequest>,
) -> Result<Json<AffordabilityVerdict>, AppError> {
    if !body.amount.is_finite() || body.amount <= 0.0 {
        return Err(AppError::bad_request("Amount must be a positive number"));
    }

    let savings_goal = body.savings_goal.unwrap_or(state.goals.savings_goal);

    Ok(Json(analyzer::can_afford_purchase(
        &state.budget,
        &state.transactions,
        body.amount,
        savings_goal,
    )))
}

/// GET /api/analysis/projection - Projected savings at month end
pub async fn month_end_projection(State(state): State<Arc<AppState>>) -> Json<MonthEndProjection> {
    Json(projection::month_end_projection(
        &state.budget,
        &state.transactions,
    ))
}

/// Query parameters for the weekly budget
#[derive(Debug, Deserialize)]
pub struct WeeklyBudgetQuery {
    /// Category label, e.g. "Dining"
    pub category: String,
}

/// Weekly average for one category
#[derive(Debug, Serialize)]
pub struct WeeklyBudget {
    pub category: Category,
    pub weekly_budget: f64,
}

/// GET /api/analysis/weekly-budget - Weekly average spend for a category
///
/// Categories with no spending this month report 0 rather than 404ing;
/// an unknown label is a valid category with nothing spent on it.
pub async fn weekly_budget(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeeklyBudgetQuery>,
) -> Json<WeeklyBudget> {
    let category = Category::from(params.category.as_str());
    let weekly_budget = analyzer::weekly_budget(&state.transactions, &category);

    Json(WeeklyBudget {
        category,
        weekly_budget,
    })
}
