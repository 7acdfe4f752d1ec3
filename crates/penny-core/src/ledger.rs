//! Ledger aggregation
//!
//! Pure reductions over a transaction slice: income/expense totals,
//! per-category grouping, and the discretionary subtotal. No side effects
//! and no error cases; an empty slice yields zero totals and empty lists.

use crate::models::{CategorySpending, Transaction, TransactionKind};

/// Number of categories shown in summaries when the caller has no opinion.
pub const DEFAULT_TOP_CATEGORIES: usize = 3;

/// Sum of all expense-kind amounts.
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum()
}

/// Sum of all income-kind amounts.
pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses for the period.
pub fn current_savings(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expenses(transactions)
}

/// Expense totals grouped by category, largest first.
///
/// Equal totals keep the order their categories first appear in the input,
/// so the result is deterministic for a given slice.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut totals: Vec<CategorySpending> = Vec::new();

    for tx in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        match totals.iter_mut().find(|c| c.category == tx.category) {
            Some(entry) => entry.amount += tx.amount,
            None => totals.push(CategorySpending {
                category: tx.category.clone(),
                amount: tx.amount,
            }),
        }
    }

    // Stable sort preserves first-seen order on ties
    totals.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    totals
}

/// The `limit` largest spending categories (all of them when fewer exist).
pub fn top_categories(transactions: &[Transaction], limit: usize) -> Vec<CategorySpending> {
    let mut totals = category_totals(transactions);
    totals.truncate(limit);
    totals
}

/// Total spent across the discretionary allow-list
/// (Dining, Shopping, Rideshare, Entertainment).
pub fn discretionary_spending(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.category.is_discretionary())
        .map(|t| t.amount)
        .sum()
}
