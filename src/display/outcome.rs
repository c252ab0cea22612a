//! User-facing messages for completed actions

use crate::models::Money;
use crate::services::{DepositReceipt, ExpenseReceipt, LimitWarning, LoginOutcome, PaymentReceipt};

pub fn login_message(outcome: &LoginOutcome) -> String {
    if outcome.registered {
        format!("New account created for {}.", outcome.username)
    } else {
        format!("Welcome back, {}.", outcome.username)
    }
}

pub fn deposit_message(receipt: &DepositReceipt, symbol: &str) -> String {
    format!(
        "{} added to your wallet.",
        receipt.amount.format_with_symbol(symbol)
    )
}

pub fn payment_message(receipt: &PaymentReceipt, symbol: &str) -> String {
    format!(
        "{} sent to {}.",
        receipt.amount.format_with_symbol(symbol),
        receipt.recipient
    )
}

pub fn expense_message(receipt: &ExpenseReceipt, symbol: &str) -> String {
    format!(
        "Expense of {} recorded under {}.",
        receipt.amount.format_with_symbol(symbol),
        receipt.category
    )
}

pub fn limit_message(limit: Option<Money>, symbol: &str) -> String {
    match limit {
        Some(limit) => format!("Limit set to {}.", limit.format_with_symbol(symbol)),
        None => "Limit cleared.".to_string(),
    }
}

/// Text of the non-blocking over-limit warning
pub fn limit_warning_message(warning: &LimitWarning, symbol: &str) -> String {
    format!(
        "You've exceeded your spending limit! Spent {} of {}.",
        warning.total_expenses.format_with_symbol(symbol),
        warning.limit.format_with_symbol(symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    #[test]
    fn test_messages() {
        let outcome = LoginOutcome {
            username: "alice".into(),
            registered: true,
        };
        assert_eq!(login_message(&outcome), "New account created for alice.");

        assert_eq!(
            deposit_message(
                &DepositReceipt {
                    amount: Money::from_dollars(100),
                    balance: Money::from_dollars(150),
                },
                "$"
            ),
            "$100.00 added to your wallet."
        );

        let receipt = ExpenseReceipt {
            amount: Money::from_dollars(15),
            category: ExpenseCategory::Food,
            limit_warning: None,
        };
        assert_eq!(
            expense_message(&receipt, "$"),
            "Expense of $15.00 recorded under Food."
        );

        assert_eq!(limit_message(None, "$"), "Limit cleared.");
    }

    #[test]
    fn test_limit_warning_message() {
        let warning = LimitWarning {
            limit: Money::from_dollars(20),
            total_expenses: Money::from_dollars(25),
        };
        assert_eq!(
            limit_warning_message(&warning, "$"),
            "You've exceeded your spending limit! Spent $25.00 of $20.00."
        );
    }
}
