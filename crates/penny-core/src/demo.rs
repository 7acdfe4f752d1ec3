//! Built-in demo data
//!
//! A fixed month of transactions plus the matching budget and recurring
//! charges, standing in for the data-loading collaborator a real
//! deployment would have. Tests hand-verify aggregates against these
//! figures, so the amounts are load-bearing.

use chrono::NaiveDate;

use crate::models::{Category, MonthlyBudget, RecurringExpense, Transaction, TransactionKind};

/// The demo monthly budget.
pub fn demo_budget() -> MonthlyBudget {
    MonthlyBudget {
        income: 5000.0,
        fixed: 2200.0,
        essentials: 800.0,
        discretionary: 2000.0,
    }
}

fn tx(
    id: &str,
    amount: f64,
    category: Category,
    description: &str,
    day: u32,
    kind: TransactionKind,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        category,
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        kind,
    }
}

/// The demo ledger: one salary deposit and a month of expenses.
pub fn demo_transactions() -> Vec<Transaction> {
    use Category::*;
    use TransactionKind::{Expense, Income};

    vec![
        // Income
        tx("1", 5000.0, Salary, "Monthly Salary", 1, Income),
        // Fixed expenses
        tx("2", 1200.0, Rent, "Monthly Rent", 1, Expense),
        tx("3", 300.0, Utilities, "Electric & Gas", 5, Expense),
        tx("4", 150.0, Insurance, "Health Insurance", 1, Expense),
        tx("5", 350.0, CarPayment, "Auto Loan", 1, Expense),
        tx("6", 200.0, Phone, "Mobile Plan", 1, Expense),
        // Essentials
        tx("7", 450.0, Groceries, "Weekly Groceries", 15, Expense),
        tx("8", 80.0, Gas, "Gas Station", 10, Expense),
        tx("9", 120.0, Healthcare, "Doctor Visit", 12, Expense),
        tx("10", 150.0, PersonalCare, "Haircut & Pharmacy", 8, Expense),
        // Discretionary - Dining
        tx("11", 45.0, Dining, "Dinner at Italian Place", 3, Expense),
        tx("12", 25.0, Dining, "Lunch with coworkers", 5, Expense),
        tx("13", 35.0, Dining, "Weekend brunch", 7, Expense),
        tx("14", 55.0, Dining, "Date night dinner", 14, Expense),
        tx("15", 28.0, Dining, "Coffee shop", 16, Expense),
        tx("16", 42.0, Dining, "Thai takeout", 18, Expense),
        // Discretionary - Shopping
        tx("17", 85.0, Shopping, "New shoes", 6, Expense),
        tx("18", 120.0, Shopping, "Winter jacket", 11, Expense),
        tx("19", 35.0, Shopping, "Books", 13, Expense),
        tx("20", 60.0, Shopping, "Home decor", 17, Expense),
        // Discretionary - Rideshare
        tx("21", 15.0, Rideshare, "Uber to airport", 4, Expense),
        tx("22", 12.0, Rideshare, "Lyft downtown", 9, Expense),
        tx("23", 18.0, Rideshare, "Uber home from dinner", 14, Expense),
        tx("24", 22.0, Rideshare, "Lyft to meeting", 19, Expense),
        // Subscriptions
        tx("25", 15.99, Subscriptions, "Spotify Premium", 1, Expense),
        tx("26", 18.99, Subscriptions, "Netflix", 5, Expense),
        tx("27", 29.99, Subscriptions, "Gym Membership", 1, Expense),
    ]
}

/// Known upcoming charges for the dashboard.
pub fn demo_recurring() -> Vec<RecurringExpense> {
    fn next(name: &str, amount: f64, category: Category, month: u32, day: u32) -> RecurringExpense {
        RecurringExpense {
            name: name.to_string(),
            amount,
            category,
            next_date: NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
        }
    }

    vec![
        next("Spotify Premium", 15.99, Category::Subscriptions, 2, 1),
        next("Netflix", 18.99, Category::Subscriptions, 2, 5),
        next("Gym Membership", 29.99, Category::Subscriptions, 2, 1),
        next("Monthly Rent", 1200.0, Category::Rent, 2, 1),
        next("Car Payment", 350.0, Category::CarPayment, 2, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger;

    #[test]
    fn test_demo_ledger_shape() {
        let txs = demo_transactions();
        assert_eq!(txs.len(), 27);
        assert_eq!(
            txs.iter()
                .filter(|t| t.kind == TransactionKind::Income)
                .count(),
            1
        );
    }

    #[test]
    fn test_demo_hand_computed_totals() {
        let txs = demo_transactions();

        // Fixed 2200 + essentials 800 + dining 230 + shopping 300
        // + rideshare 67 + subscriptions 64.97
        assert!((ledger::total_expenses(&txs) - 3661.97).abs() < 1e-9);
        assert_eq!(ledger::total_income(&txs), 5000.0);
        assert!((ledger::current_savings(&txs) - 1338.03).abs() < 1e-9);
        assert_eq!(ledger::discretionary_spending(&txs), 597.0);
    }

    #[test]
    fn test_demo_category_sums_cover_total() {
        let txs = demo_transactions();
        let totals = ledger::category_totals(&txs);

        let summed: f64 = totals.iter().map(|c| c.amount).sum();
        assert!((summed - ledger::total_expenses(&txs)).abs() < 1e-9);

        let dining = totals
            .iter()
            .find(|c| c.category == Category::Dining)
            .unwrap();
        assert_eq!(dining.amount, 230.0);
        let subs = totals
            .iter()
            .find(|c| c.category == Category::Subscriptions)
            .unwrap();
        assert!((subs.amount - 64.97).abs() < 1e-9);
    }
}
