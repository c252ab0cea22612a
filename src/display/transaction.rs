//! Transaction history formatting

use crate::config::Settings;
use crate::models::Account;

/// Placeholder when an account has no log entries
pub const NO_TRANSACTIONS: &str = "No transactions yet.";

/// Rendered log lines, oldest first
pub fn history_lines(account: &Account, settings: &Settings) -> Vec<String> {
    account
        .transactions
        .iter()
        .map(|t| t.render(&settings.currency_symbol, &settings.timestamp_format))
        .collect()
}

/// The whole log as text, or the placeholder when it is empty
pub fn format_transaction_history(account: &Account, settings: &Settings) -> String {
    if account.transactions.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }
    history_lines(account, settings).join("\n")
}
