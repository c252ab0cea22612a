//! Service layer for Sonova Wallet
//!
//! The service layer holds the domain operations: login, adding funds,
//! payments, expenses and the spending limit. Services borrow the account
//! store for the duration of one action and either apply the whole change
//! or none of it.

pub mod auth;
pub mod validation;
pub mod wallet;

pub use auth::{AuthService, LoginOutcome};
pub use validation::{parse_amount, parse_limit};
pub use wallet::{DepositReceipt, ExpenseReceipt, LimitWarning, PaymentReceipt, WalletService};
