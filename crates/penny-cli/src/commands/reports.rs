//! Report command implementations

use anyhow::Result;

use penny_core::models::format_dollars;
use penny_core::{ledger, projection};

use super::MonthData;

pub fn cmd_summary(month: &MonthData) -> Result<()> {
    let txs = &month.transactions;
    let budget = &month.config.budget;

    let spending = ledger::total_expenses(txs);
    let savings = budget.income - spending;

    println!();
    println!("📊 Month Summary");
    println!("   ─────────────────────────────────────");
    println!("   Income:                 ${:>8}", format_dollars(budget.income));
    println!("   Spending:               ${:>8}", format_dollars(spending));
    println!("   Savings so far:         ${:>8}", format_dollars(savings));
    println!(
        "   Discretionary spending: ${:>8}",
        format_dollars(ledger::discretionary_spending(txs))
    );
    println!();
    println!("   Budget: ${} fixed · ${} essentials · ${} discretionary",
        format_dollars(budget.fixed),
        format_dollars(budget.essentials),
        format_dollars(budget.discretionary)
    );

    let top = ledger::top_categories(txs, ledger::DEFAULT_TOP_CATEGORIES);
    if !top.is_empty() {
        println!();
        println!("   Top categories:");
        for cat in &top {
            println!("   - {}: ${}", cat.category, format_dollars(cat.amount));
        }
    }

    if !month.recurring.is_empty() {
        println!();
        println!("   Upcoming recurring charges:");
        for exp in &month.recurring {
            println!(
                "   - {} (${}) due {}",
                exp.name,
                format_dollars(exp.amount),
                exp.next_date
            );
        }
    }

    let projection = projection::month_end_projection(budget, txs);
    println!();
    println!("   {}", projection.on_track_message);
    if let Some(suggestion) = &projection.adjustment_suggestion {
        println!("   {}", suggestion);
    }

    Ok(())
}

pub fn cmd_categories(month: &MonthData, limit: Option<usize>) -> Result<()> {
    let totals = match limit {
        Some(limit) => ledger::top_categories(&month.transactions, limit),
        None => ledger::category_totals(&month.transactions),
    };

    println!();
    println!("📊 Spending by Category");
    println!("   ─────────────────────────────────────");

    if totals.is_empty() {
        println!("   No spending recorded this month.");
        return Ok(());
    }

    let total: f64 = totals.iter().map(|c| c.amount).sum();
    for cat in &totals {
        println!(
            "   {:<16} ${:>8}  ({:>4.1}%)",
            cat.category.to_string(),
            format_dollars(cat.amount),
            cat.amount / total * 100.0
        );
    }
    println!("   ─────────────────────────────────────");
    println!("   {:<16} ${:>8}", "Total", format_dollars(total));

    Ok(())
}
