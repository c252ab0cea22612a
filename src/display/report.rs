//! Report formatting for terminal output

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Account, Money};
use crate::reports::AccountSummary;

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format an account summary as labelled lines
pub fn format_summary(summary: &AccountSummary, symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", summary.username));
    output.push_str(&separator(32));
    output.push('\n');
    output.push_str(&format!("{:<16}{:>16}\n", "Total Income", money(summary.total_income)));
    output.push_str(&format!("{:<16}{:>16}\n", "Total Expenses", money(summary.total_expenses)));
    output.push_str(&format!("{:<16}{:>16}\n", "Balance", money(summary.balance)));
    output.push_str(&separator(32));
    output.push('\n');

    for (category, amount) in &summary.categories {
        output.push_str(&format!("  {:<14}{:>16}\n", category.name(), money(*amount)));
    }

    output.push_str(&separator(32));
    output.push('\n');
    match (summary.monthly_limit, summary.remaining) {
        (Some(limit), Some(remaining)) => {
            output.push_str(&format!("{:<16}{:>16}\n", "Monthly Limit", money(limit)));
            output.push_str(&format!("{:<16}{:>16}\n", "Remaining", money(remaining)));
            if remaining.is_negative() {
                output.push_str("You've exceeded your spending limit!\n");
            }
        }
        _ => output.push_str(&format!("{:<16}{:>16}\n", "Monthly Limit", "not set")),
    }

    output
}

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "User")]
    username: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

/// Format accounts as a table
pub fn format_account_table(accounts: &[&Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts.".to_string();
    }

    let rows = accounts.iter().map(|a| AccountRow {
        username: a.username.clone(),
        balance: a.balance.format_with_symbol(symbol),
        income: a.total_income.format_with_symbol(symbol),
        expenses: a.total_expenses().format_with_symbol(symbol),
        limit: a
            .monthly_limit
            .map(|l| l.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string()),
        entries: a.transactions.len(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
