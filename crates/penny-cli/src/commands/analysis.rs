//! Analysis command implementations

use anyhow::Result;

use penny_core::models::format_dollars;
use penny_core::{analyzer, coach, ledger, projection, Category};

use super::MonthData;

pub fn cmd_target(month: &MonthData, percentage: Option<f64>) -> Result<()> {
    let percentage = percentage.unwrap_or(month.config.goals.target_rate);
    if !(1.0..=100.0).contains(&percentage) {
        anyhow::bail!("Percentage must be between 1 and 100");
    }

    let target = analyzer::savings_target(&month.config.budget, &month.transactions, percentage);

    println!();
    println!("🎯 Savings Target ({}% of income)", target.percentage);
    println!("   ─────────────────────────────────────");
    println!("   Target:  ${:>8}", format_dollars(target.target));
    println!("   Current: ${:>8}", format_dollars(target.current));

    if target.gap > 0.0 {
        println!("   Gap:     ${:>8} behind", format_dollars(target.gap));
    } else {
        println!("   Ahead by ${:>8}", format_dollars(-target.gap));
    }

    Ok(())
}

pub fn cmd_suggest(month: &MonthData) -> Result<()> {
    let totals = ledger::category_totals(&month.transactions);
    let cuts = analyzer::generate_cut_suggestions(&totals);

    println!();
    println!("✂️  Cut Suggestions");
    println!("   ─────────────────────────────────────");

    if cuts.is_empty() {
        println!("   Nothing worth cutting. Discretionary spending looks lean.");
        return Ok(());
    }

    for cut in &cuts {
        println!(
            "   {} — now ${}, cap at ${} to save ${}",
            cut.category,
            format_dollars(cut.current_spending),
            format_dollars(cut.suggested_cap),
            format_dollars(cut.potential_savings)
        );
        println!("     {}", cut.reasoning);
    }

    Ok(())
}

pub fn cmd_afford(month: &MonthData, amount: f64, goal: Option<f64>) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        anyhow::bail!("Amount must be a positive number");
    }

    let goal = goal.unwrap_or(month.config.goals.savings_goal);
    let verdict =
        analyzer::can_afford_purchase(&month.config.budget, &month.transactions, amount, goal);

    println!();
    if verdict.can_afford {
        println!("✅ {}", verdict.impact);
    } else {
        println!("❌ {}", verdict.impact);
        for line in &verdict.suggestions {
            println!("   {}", line);
        }
    }

    Ok(())
}

pub fn cmd_weekly(month: &MonthData, category: &str) -> Result<()> {
    let category = Category::from(category);
    let weekly = analyzer::weekly_budget(&month.transactions, &category);

    println!();
    if weekly > 0.0 {
        println!("📅 {} runs about ${}/week so far", category, format_dollars(weekly));
    } else {
        println!("📅 No {} spending recorded this month", category);
    }

    Ok(())
}

pub fn cmd_projection(month: &MonthData) -> Result<()> {
    let projection = projection::month_end_projection(&month.config.budget, &month.transactions);

    println!();
    println!("🔮 Month-End Projection");
    println!("   ─────────────────────────────────────");
    println!("   {}", projection.on_track_message);
    if let Some(suggestion) = &projection.adjustment_suggestion {
        println!("   {}", suggestion);
    }

    Ok(())
}

pub fn cmd_prompt(month: &MonthData) -> Result<()> {
    let ctx = coach::coach_context(&month.config.budget, &month.transactions);
    println!("{}", ctx.system_prompt);
    Ok(())
}
