//! Display formatting for terminal output
//!
//! Plain-text renderings shared by the replay command and the TUI views.

pub mod outcome;
pub mod report;
pub mod transaction;

pub use report::{format_account_table, format_summary, separator};
pub use transaction::{format_transaction_history, history_lines, NO_TRANSACTIONS};
