//! Reports module for Sonova Wallet
//!
//! Pure computations over an account that the views render: the expense
//! breakdown behind the pie chart, the balance trend behind the line chart,
//! and the financial summary.

pub mod balance_trend;
pub mod expense_breakdown;
pub mod summary;

pub use balance_trend::BalanceTrend;
pub use expense_breakdown::{CategorySlice, ExpenseBreakdown, PIE_START_ANGLE};
pub use summary::AccountSummary;
