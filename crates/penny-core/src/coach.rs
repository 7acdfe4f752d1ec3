//! Coach prompt context
//!
//! Assembles the system prompt for the chat coach: the embedded template
//! rendered with this month's computed figures. The call to the hosted
//! model and the streaming relay back to the browser live with the chat
//! front end, not here — this module only produces the payload text and
//! the figures behind it.

use std::collections::HashMap;

use serde::Serialize;

use crate::ledger;
use crate::models::{format_dollars, CategorySpending, MonthlyBudget, Transaction};

/// Embedded coach prompt template (compiled into binary)
const COACH_SYSTEM: &str = include_str!("../../../prompts/coach_system.md");

/// Computed figures plus the rendered system prompt
///
/// The figures are exposed alongside the prompt so a dashboard can render
/// them without re-deriving.
#[derive(Debug, Clone, Serialize)]
pub struct CoachContext {
    pub monthly_income: f64,
    pub fixed_expenses: f64,
    pub essential_expenses: f64,
    pub discretionary_budget: f64,
    pub current_spending: f64,
    pub current_savings: f64,
    pub discretionary_spending: f64,
    pub top_categories: Vec<CategorySpending>,
    pub system_prompt: String,
}

/// Assemble the coach context for the current month.
pub fn coach_context(budget: &MonthlyBudget, transactions: &[Transaction]) -> CoachContext {
    let current_spending = ledger::total_expenses(transactions);
    let current_savings = budget.income - current_spending;
    let discretionary = ledger::discretionary_spending(transactions);
    let top_categories = ledger::top_categories(transactions, ledger::DEFAULT_TOP_CATEGORIES);

    let top_lines = top_categories
        .iter()
        .map(|c| format!("- {}: ${}", c.category, format_dollars(c.amount)))
        .collect::<Vec<_>>()
        .join("\n");

    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("monthly_income", format_dollars(budget.income));
    vars.insert("fixed_expenses", format_dollars(budget.fixed));
    vars.insert("essential_expenses", format_dollars(budget.essentials));
    vars.insert("discretionary_budget", format_dollars(budget.discretionary));
    vars.insert("current_spending", format_dollars(current_spending));
    vars.insert("current_savings", format_dollars(current_savings));
    vars.insert("discretionary_spending", format_dollars(discretionary));
    vars.insert("top_categories", top_lines);

    let system_prompt = render(COACH_SYSTEM, &vars);

    CoachContext {
        monthly_income: budget.income,
        fixed_expenses: budget.fixed,
        essential_expenses: budget.essentials,
        discretionary_budget: budget.discretionary,
        current_spending,
        current_savings,
        discretionary_spending: discretionary,
        top_categories,
        system_prompt,
    }
}

/// Simple mustache-style replacement: {{var}}
fn render(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.trim_end().to_string();
    for (key, value) in vars {
        let pattern = format!("{{{{{}}}}}", key);
        result = result.replace(&pattern, value);
    }
    result
}
