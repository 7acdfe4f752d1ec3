//! Month-end projection
//!
//! Extrapolates end-of-month savings linearly from the discretionary burn
//! rate so far. The projection assumes a fixed vantage point of day 21 in
//! a 30-day month; it does not read the calendar.

use serde::{Deserialize, Serialize};

use crate::ledger;
use crate::models::{format_dollars, MonthlyBudget, Transaction};

/// Days assumed elapsed at the projection's vantage point.
pub const DAYS_ELAPSED: f64 = 21.0;

/// Length of the projection month in days.
pub const DAYS_IN_MONTH: f64 = 30.0;

/// Projected savings at or above this level count as fully on track.
const ON_TRACK_FLOOR: f64 = 1000.0;

/// Projected savings at or above this level get a nudge rather than a warning.
const CLOSE_FLOOR: f64 = 800.0;

/// Projected savings at month end with a tiered narrative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthEndProjection {
    /// Rounded to whole dollars
    pub projected_savings: f64,
    pub on_track_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_suggestion: Option<String>,
}

/// Project savings at month end from the current discretionary daily rate.
///
/// Tier boundaries are evaluated on the unrounded projection and are
/// inclusive: exactly $1,000 is on track, exactly $800 is the nudge tier.
pub fn month_end_projection(
    budget: &MonthlyBudget,
    transactions: &[Transaction],
) -> MonthEndProjection {
    let current_savings = budget.income - ledger::total_expenses(transactions);

    let remaining_days = DAYS_IN_MONTH - DAYS_ELAPSED;
    let daily_rate = ledger::discretionary_spending(transactions) / DAYS_ELAPSED;
    let projected_additional = daily_rate * remaining_days;

    let projected = current_savings - projected_additional;

    tracing::debug!(current_savings, daily_rate, projected, "Month-end projection");

    let (on_track_message, adjustment_suggestion) = if projected >= ON_TRACK_FLOOR {
        (
            format!(
                "🎉 You're on track to save ${} this month!",
                format_dollars(projected)
            ),
            None,
        )
    } else if projected >= CLOSE_FLOOR {
        (
            format!(
                "⚠️ You're projected to save ${} - close to your goal.",
                format_dollars(projected)
            ),
            Some(
                "Consider reducing discretionary spending by $50-100 this week to stay on track."
                    .to_string(),
            ),
        )
    } else {
        let gap = ON_TRACK_FLOOR - projected;
        (
            format!(
                "❌ You're projected to save only ${} this month.",
                format_dollars(projected)
            ),
            Some(format!(
                "You need to cut ${} in spending to reach your goal.",
                format_dollars(gap)
            )),
        )
    };

    MonthEndProjection {
        projected_savings: projected.round(),
        on_track_message,
        adjustment_suggestion,
    }
}
