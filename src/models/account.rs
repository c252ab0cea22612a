//! Account model
//!
//! One wallet per username: balance, PIN credential, transaction log,
//! per-category expense totals, balance history and an optional spending
//! limit.
//!
//! The `apply_*` methods perform the state change of an action and keep the
//! log and history in step with the balance. They do not validate; callers
//! in the service layer check amounts and funds first.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

use super::category::{ExpenseCategory, ExpenseSummary};
use super::history::BalanceHistory;
use super::money::Money;
use super::transaction::TransactionEntry;
use crate::crypto::PinHash;

/// A user's wallet
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Unique key in the store
    pub username: String,

    /// Argon2 hash of the PIN
    #[serde(skip_serializing)]
    pub pin: PinHash,

    /// Current balance
    pub balance: Money,

    /// Funds added plus payments received, over the account's lifetime
    pub total_income: Money,

    /// Append-only log, oldest first
    pub transactions: Vec<TransactionEntry>,

    /// Accumulated spend per category
    pub expense_summary: ExpenseSummary,

    /// Balance snapshots for charting
    pub balance_history: BalanceHistory,

    /// Spending ceiling compared against cumulative expenses
    pub monthly_limit: Option<Money>,

    /// When the account was registered
    pub created_at: DateTime<Local>,
}

impl Account {
    /// Create a new zero-balance account
    pub fn new(username: impl Into<String>, pin: PinHash, created_at: DateTime<Local>) -> Self {
        Self {
            username: username.into(),
            pin,
            balance: Money::zero(),
            total_income: Money::zero(),
            transactions: Vec::new(),
            expense_summary: ExpenseSummary::new(),
            balance_history: BalanceHistory::new(),
            monthly_limit: None,
            created_at,
        }
    }

    /// Add funds to the wallet
    pub fn apply_deposit(&mut self, at: DateTime<Local>, amount: Money) {
        self.balance += amount;
        self.total_income += amount;
        self.transactions
            .push(TransactionEntry::funds_added(at, amount));
        self.balance_history.record(at, self.balance);
    }

    /// Debit side of a payment
    pub fn apply_payment_sent(&mut self, at: DateTime<Local>, amount: Money, to: &str) {
        self.balance -= amount;
        self.transactions
            .push(TransactionEntry::payment_sent(at, amount, to));
        self.balance_history.record(at, self.balance);
    }

    /// Credit side of a payment
    ///
    /// The recipient's balance history is left alone; only the account
    /// holder's own actions add chart samples.
    pub fn apply_payment_received(&mut self, at: DateTime<Local>, amount: Money, from: &str) {
        self.balance += amount;
        self.total_income += amount;
        self.transactions
            .push(TransactionEntry::payment_received(at, amount, from));
    }

    /// Record an expense
    pub fn apply_expense(&mut self, at: DateTime<Local>, amount: Money, category: ExpenseCategory) {
        self.balance -= amount;
        self.expense_summary.record(category, amount);
        self.transactions
            .push(TransactionEntry::expense(at, amount, category));
        self.balance_history.record(at, self.balance);
    }

    /// Seed the chart with the current balance if no sample exists yet
    pub fn ensure_history_seeded(&mut self, at: DateTime<Local>) {
        if self.balance_history.is_empty() {
            self.balance_history.record(at, self.balance);
        }
    }

    /// Sum of all recorded expenses
    pub fn total_expenses(&self) -> Money {
        self.expense_summary.total()
    }

    /// True when a positive limit is set and cumulative expenses exceed it
    pub fn is_over_limit(&self) -> bool {
        match self.monthly_limit {
            Some(limit) if limit.is_positive() => self.total_expenses() > limit,
            _ => false,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.balance)
    }
}
