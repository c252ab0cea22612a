//! Core data models for Sonova Wallet
//!
//! This module contains the data structures of the wallet domain: accounts,
//! money, expense categories, transaction log entries and balance history.

pub mod account;
pub mod category;
pub mod history;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use category::{ExpenseCategory, ExpenseSummary};
pub use history::{BalanceHistory, BalanceSample};
pub use money::{Money, MoneyParseError};
pub use transaction::{EntryKind, TransactionEntry, DEFAULT_TIMESTAMP_FORMAT};
