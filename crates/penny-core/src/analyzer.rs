//! Budget analysis
//!
//! Savings-target math, per-category cut suggestions, and affordability
//! verdicts against a monthly budget. The cap multipliers, floors, and
//! thresholds are product rules, not derived figures.

use serde::{Deserialize, Serialize};

use crate::ledger;
use crate::models::{format_dollars, Category, CategorySpending, MonthlyBudget, Transaction};

/// Savings floor used by affordability checks when the caller has no
/// configured goal.
pub const DEFAULT_SAVINGS_GOAL: f64 = 1000.0;

/// Category total below which cuts are not worth discussing.
const CUT_CONSIDERATION_FLOOR: f64 = 50.0;

/// Suggestions saving less than this are dropped as noise.
const MIN_POTENTIAL_SAVINGS: f64 = 10.0;

/// Weeks assumed elapsed when averaging a category into a weekly figure.
const WEEKS_ELAPSED: f64 = 3.0;

/// Where this month's savings stand against a target percentage of income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsTarget {
    /// Income × percentage, rounded to whole dollars
    pub target: f64,
    /// Budget income minus actual spending
    pub current: f64,
    /// Target minus current; positive means behind
    pub gap: f64,
    pub percentage: f64,
}

/// Compute the savings target and the gap to it.
///
/// `current` is measured against the budget's income figure, not summed
/// income transactions; the two may disagree when the budget is stale.
pub fn savings_target(
    budget: &MonthlyBudget,
    transactions: &[Transaction],
    target_percentage: f64,
) -> SavingsTarget {
    let target = (budget.income * (target_percentage / 100.0)).round();
    let current = budget.income - ledger::total_expenses(transactions);

    SavingsTarget {
        target,
        current,
        gap: target - current,
        percentage: target_percentage,
    }
}

/// A proposed spending cap for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutSuggestion {
    pub category: Category,
    pub current_spending: f64,
    pub suggested_cap: f64,
    pub potential_savings: f64,
    pub reasoning: String,
}

/// Cap multiplier, floor, and rationale per category.
fn cap_policy(category: &Category) -> (f64, f64, &'static str) {
    match category {
        Category::Dining => (
            0.7,
            120.0,
            "Reduce delivery orders and cook more at home, while keeping restaurant outings",
        ),
        Category::Shopping => (
            0.6,
            150.0,
            "Focus on needs vs wants, wait 24 hours before non-essential purchases",
        ),
        Category::Rideshare => (
            0.6,
            30.0,
            "Use public transport or walk for shorter trips when possible",
        ),
        Category::Subscriptions => (
            0.5,
            15.0,
            "Cancel unused subscriptions and downgrade services you rarely use",
        ),
        _ => (0.8, 50.0, "Look for more cost-effective alternatives"),
    }
}

/// Propose spending caps for discretionary categories, largest potential
/// savings first.
///
/// Only categories in the fixed cut-eligible set with more than $50 spent
/// are considered; the cap never drops below the category's floor, and a
/// suggestion is dropped unless it would save more than $10.
pub fn generate_cut_suggestions(category_totals: &[CategorySpending]) -> Vec<CutSuggestion> {
    let mut suggestions: Vec<CutSuggestion> = Vec::new();

    for entry in category_totals {
        if !entry.category.is_cut_eligible() || entry.amount <= CUT_CONSIDERATION_FLOOR {
            continue;
        }

        let (multiplier, floor, reasoning) = cap_policy(&entry.category);
        let suggested_cap = (entry.amount * multiplier).max(floor);
        let potential_savings = entry.amount - suggested_cap;

        if potential_savings > MIN_POTENTIAL_SAVINGS {
            suggestions.push(CutSuggestion {
                category: entry.category.clone(),
                current_spending: entry.amount,
                suggested_cap,
                potential_savings,
                reasoning: reasoning.to_string(),
            });
        }
    }

    suggestions.sort_by(|a, b| {
        b.potential_savings
            .partial_cmp(&a.potential_savings)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    suggestions
}

/// The outcome of an affordability check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityVerdict {
    pub can_afford: bool,
    /// Narrative with the computed dollar figures
    pub impact: String,
    /// Empty when affordable; otherwise a lead-in line plus up to three
    /// suggested category caps
    pub suggestions: Vec<String>,
}

/// Check whether a purchase fits without dropping this month's savings
/// below `savings_goal`.
///
/// The suggested caps attached on denial come from full category totals;
/// they are not sized down to close the specific shortfall.
pub fn can_afford_purchase(
    budget: &MonthlyBudget,
    transactions: &[Transaction],
    amount: f64,
    savings_goal: f64,
) -> AffordabilityVerdict {
    let current_savings = budget.income - ledger::total_expenses(transactions);
    let new_savings = current_savings - amount;
    let can_afford = new_savings >= savings_goal;

    tracing::debug!(
        amount,
        new_savings,
        savings_goal,
        can_afford,
        "Affordability check"
    );

    if can_afford {
        return AffordabilityVerdict {
            can_afford,
            impact: format!(
                "You can afford this! You'll still save ${} this month.",
                format_dollars(new_savings)
            ),
            suggestions: Vec::new(),
        };
    }

    let shortfall = savings_goal - new_savings;
    let impact = format!(
        "This would reduce your savings to ${}, which is ${} short of your ${} goal.",
        format_dollars(new_savings),
        format_dollars(shortfall),
        format_dollars(savings_goal)
    );

    let cuts = generate_cut_suggestions(&ledger::category_totals(transactions));
    let mut suggestions = Vec::new();
    if !cuts.is_empty() {
        suggestions.push("To afford this while maintaining your savings goal, you could:".to_string());
        for cut in cuts.iter().take(3) {
            suggestions.push(format!(
                "• Cap {} at ${} (save ${})",
                cut.category,
                format_dollars(cut.suggested_cap),
                format_dollars(cut.potential_savings)
            ));
        }
    }

    AffordabilityVerdict {
        can_afford,
        impact,
        suggestions,
    }
}

/// Average weekly spend for a category, assuming three weeks elapsed.
///
/// Categories with no spending this month come back as 0.0 rather than an
/// error.
pub fn weekly_budget(transactions: &[Transaction], category: &Category) -> f64 {
    ledger::category_totals(transactions)
        .iter()
        .find(|c| &c.category == category)
        .map(|c| (c.amount / WEEKS_ELAPSED).round())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn tx(id: &str, amount: f64, category: Category, kind: TransactionKind) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount,
            category,
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            kind,
        }
    }

    fn spending(category: Category, amount: f64) -> CategorySpending {
        CategorySpending { category, amount }
    }

    #[test]
    fn test_savings_target_math() {
        let budget = MonthlyBudget {
            income: 5000.0,
            fixed: 2200.0,
            essentials: 800.0,
            discretionary: 2000.0,
        };
        let txs = vec![tx("1", 4350.0, Category::Rent, TransactionKind::Expense)];

        let target = savings_target(&budget, &txs, 20.0);
        assert_eq!(target.target, 1000.0);
        assert_eq!(target.current, 650.0);
        assert_eq!(target.gap, 350.0);
        assert_eq!(target.percentage, 20.0);
    }

    #[test]
    fn test_cut_suggestions_apply_cap_policy() {
        let totals = vec![
            spending(Category::Dining, 230.0),
            spending(Category::Shopping, 300.0),
            spending(Category::Rideshare, 67.0),
            spending(Category::Subscriptions, 64.97),
        ];

        let cuts = generate_cut_suggestions(&totals);
        assert_eq!(cuts.len(), 4);

        // Sorted descending by potential savings
        assert_eq!(cuts[0].category, Category::Shopping);
        assert_eq!(cuts[0].suggested_cap, 180.0);
        assert_eq!(cuts[0].potential_savings, 120.0);

        assert_eq!(cuts[1].category, Category::Dining);
        assert_eq!(cuts[1].suggested_cap, 161.0);

        for pair in cuts.windows(2) {
            assert!(pair[0].potential_savings >= pair[1].potential_savings);
        }
    }

    #[test]
    fn test_cut_suggestions_floor_wins_over_multiplier() {
        // 0.7 × 150 = 105, below the $120 Dining floor
        let cuts = generate_cut_suggestions(&[spending(Category::Dining, 150.0)]);
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].suggested_cap, 120.0);
        assert_eq!(cuts[0].potential_savings, 30.0);
    }

    #[test]
    fn test_cut_suggestions_respect_minimums() {
        // Below the $50 consideration floor: skipped entirely
        let cuts = generate_cut_suggestions(&[spending(Category::Dining, 45.0)]);
        assert!(cuts.is_empty());

        // Above $50 but saving ≤ $10: dropped (0.7 × 128 = 89.6 → cap 120, save 8)
        let cuts = generate_cut_suggestions(&[spending(Category::Dining, 128.0)]);
        assert!(cuts.is_empty());

        // Non-discretionary categories never get suggestions
        let cuts = generate_cut_suggestions(&[spending(Category::Groceries, 450.0)]);
        assert!(cuts.is_empty());

        for cut in generate_cut_suggestions(&[
            spending(Category::Shopping, 300.0),
            spending(Category::Rideshare, 67.0),
        ]) {
            assert!(cut.potential_savings > 10.0);
        }
    }

    #[test]
    fn test_entertainment_uses_default_policy() {
        // Entertainment is discretionary but has no named cap rule:
        // 0.8 × 400 = 320 beats the $50 floor
        let cuts = generate_cut_suggestions(&[spending(Category::Entertainment, 400.0)]);
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].suggested_cap, 320.0);
        assert!((cuts[0].potential_savings - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_affordability_denial_attaches_suggestions() {
        let budget = MonthlyBudget {
            income: 5000.0,
            fixed: 2200.0,
            essentials: 800.0,
            discretionary: 2000.0,
        };
        // Savings land at 5000 − 4350 = 650
        let txs = vec![
            tx("1", 3753.0, Category::Rent, TransactionKind::Expense),
            tx("2", 230.0, Category::Dining, TransactionKind::Expense),
            tx("3", 300.0, Category::Shopping, TransactionKind::Expense),
            tx("4", 67.0, Category::Rideshare, TransactionKind::Expense),
        ];

        let verdict = can_afford_purchase(&budget, &txs, 300.0, 1000.0);
        assert!(!verdict.can_afford);
        assert!(verdict.impact.contains("$350"));
        assert!(verdict.impact.contains("$650"));

        // Lead-in line plus at most three cap lines
        assert!(!verdict.suggestions.is_empty());
        assert!(verdict.suggestions.len() <= 4);
        assert!(verdict.suggestions[1].starts_with("• Cap Shopping"));
    }

    #[test]
    fn test_affordability_approval_has_no_suggestions() {
        let budget = MonthlyBudget {
            income: 5000.0,
            fixed: 2200.0,
            essentials: 800.0,
            discretionary: 2000.0,
        };
        let txs = vec![tx("1", 2000.0, Category::Rent, TransactionKind::Expense)];

        let verdict = can_afford_purchase(&budget, &txs, 500.0, 1000.0);
        assert!(verdict.can_afford);
        assert!(verdict.impact.contains("$2,500"));
        assert!(verdict.suggestions.is_empty());
    }

    #[test]
    fn test_affordability_boundary_is_inclusive() {
        let budget = MonthlyBudget {
            income: 5000.0,
            fixed: 0.0,
            essentials: 0.0,
            discretionary: 0.0,
        };
        let txs = vec![tx("1", 3000.0, Category::Rent, TransactionKind::Expense)];

        // 2000 − 1000 = exactly the goal
        let verdict = can_afford_purchase(&budget, &txs, 1000.0, 1000.0);
        assert!(verdict.can_afford);
    }

    #[test]
    fn test_weekly_budget() {
        let txs = vec![
            tx("1", 230.0, Category::Dining, TransactionKind::Expense),
            tx("2", 64.97, Category::Subscriptions, TransactionKind::Expense),
        ];

        assert_eq!(weekly_budget(&txs, &Category::Dining), 77.0);
        assert_eq!(weekly_budget(&txs, &Category::Subscriptions), 22.0);
        assert_eq!(weekly_budget(&txs, &Category::Gas), 0.0);
    }
}
