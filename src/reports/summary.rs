//! Account Summary
//!
//! Income, spending and limit headroom for one account.

use crate::models::{Account, ExpenseCategory, Money};

/// Financial overview of an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub username: String,
    /// Funds added plus payments received
    pub total_income: Money,
    /// Sum over all expense categories
    pub total_expenses: Money,
    pub balance: Money,
    /// Spend per category, in display order
    pub categories: Vec<(ExpenseCategory, Money)>,
    pub monthly_limit: Option<Money>,
    /// Limit minus expenses; negative once the limit is exceeded
    pub remaining: Option<Money>,
    pub transaction_count: usize,
}

impl AccountSummary {
    /// Summarize an account
    pub fn generate(account: &Account) -> Self {
        let total_expenses = account.total_expenses();
        Self {
            username: account.username.clone(),
            total_income: account.total_income,
            total_expenses,
            balance: account.balance,
            categories: account.expense_summary.iter().collect(),
            monthly_limit: account.monthly_limit,
            remaining: account.monthly_limit.map(|limit| limit - total_expenses),
            transaction_count: account.transactions.len(),
        }
    }

    pub fn is_over_limit(&self) -> bool {
        self.remaining.is_some_and(|r| r.is_negative())
    }
}
