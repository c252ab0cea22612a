//! Transaction log entries
//!
//! Each mutating action appends one entry to the affected account's log.
//! Entries are structured, and render to the human-readable line shown in
//! the history view.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// Default rendering of entry timestamps
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryKind {
    /// Money added to the wallet
    FundsAdded,
    /// Payment sent to another user
    PaymentSent { to: String },
    /// Payment received from another user
    PaymentReceived { from: String },
    /// Expense recorded against a category
    Expense { category: ExpenseCategory },
}

/// A single line in an account's transaction log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub timestamp: DateTime<Local>,
    pub amount: Money,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl TransactionEntry {
    pub fn new(timestamp: DateTime<Local>, amount: Money, kind: EntryKind) -> Self {
        Self {
            timestamp,
            amount,
            kind,
        }
    }

    pub fn funds_added(timestamp: DateTime<Local>, amount: Money) -> Self {
        Self::new(timestamp, amount, EntryKind::FundsAdded)
    }

    pub fn payment_sent(timestamp: DateTime<Local>, amount: Money, to: impl Into<String>) -> Self {
        Self::new(timestamp, amount, EntryKind::PaymentSent { to: to.into() })
    }

    pub fn payment_received(
        timestamp: DateTime<Local>,
        amount: Money,
        from: impl Into<String>,
    ) -> Self {
        Self::new(timestamp, amount, EntryKind::PaymentReceived { from: from.into() })
    }

    pub fn expense(timestamp: DateTime<Local>, amount: Money, category: ExpenseCategory) -> Self {
        Self::new(timestamp, amount, EntryKind::Expense { category })
    }

    /// Description without the timestamp, e.g. "Sent $40.00 to bob"
    pub fn description(&self, symbol: &str) -> String {
        let amount = self.amount.format_with_symbol(symbol);
        match &self.kind {
            EntryKind::FundsAdded => format!("Added funds: {}", amount),
            EntryKind::PaymentSent { to } => format!("Sent {} to {}", amount, to),
            EntryKind::PaymentReceived { from } => format!("Received {} from {}", amount, from),
            EntryKind::Expense { category } => format!("Expense: {} for {}", amount, category),
        }
    }

    /// Full log line, e.g. "[2025-03-01 09:30:00] Added funds: $100.00"
    pub fn render(&self, symbol: &str, timestamp_format: &str) -> String {
        format!(
            "[{}] {}",
            self.timestamp.format(timestamp_format),
            self.description(symbol)
        )
    }

    /// True for entries that increased the balance
    pub fn is_inflow(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::FundsAdded | EntryKind::PaymentReceived { .. }
        )
    }
}

impl fmt::Display for TransactionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("$", DEFAULT_TIMESTAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_render_lines() {
        let amount = Money::from_cents(4000);
        assert_eq!(
            TransactionEntry::funds_added(at(), Money::from_dollars(100)).to_string(),
            "[2025-03-01 09:30:00] Added funds: $100.00"
        );
        assert_eq!(
            TransactionEntry::payment_sent(at(), amount, "bob").to_string(),
            "[2025-03-01 09:30:00] Sent $40.00 to bob"
        );
        assert_eq!(
            TransactionEntry::payment_received(at(), amount, "alice").to_string(),
            "[2025-03-01 09:30:00] Received $40.00 from alice"
        );
        assert_eq!(
            TransactionEntry::expense(at(), Money::from_dollars(15), ExpenseCategory::Food)
                .to_string(),
            "[2025-03-01 09:30:00] Expense: $15.00 for Food"
        );
    }

    #[test]
    fn test_custom_symbol_and_format() {
        let entry = TransactionEntry::funds_added(at(), Money::from_cents(250));
        assert_eq!(entry.render("€", "%d/%m"), "[01/03] Added funds: €2.50");
    }

    #[test]
    fn test_inflow() {
        assert!(TransactionEntry::funds_added(at(), Money::from_cents(1)).is_inflow());
        assert!(TransactionEntry::payment_received(at(), Money::from_cents(1), "x").is_inflow());
        assert!(!TransactionEntry::payment_sent(at(), Money::from_cents(1), "x").is_inflow());
    }

    #[test]
    fn test_serialization_is_tagged() {
        let entry = TransactionEntry::payment_sent(at(), Money::from_cents(4000), "bob");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "payment_sent");
        assert_eq!(json["to"], "bob");
        assert_eq!(json["amount"], 4000);
    }
}
