//! Balance history
//!
//! A per-account ordered series of balance snapshots, appended on every
//! mutating action of the account holder. Only the line chart reads it.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A timestamped snapshot of an account balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSample {
    pub timestamp: DateTime<Local>,
    pub balance: Money,
}

/// Ordered balance snapshots for one account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceHistory {
    samples: Vec<BalanceSample>,
}

impl BalanceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot
    pub fn record(&mut self, timestamp: DateTime<Local>, balance: Money) {
        self.samples.push(BalanceSample { timestamp, balance });
    }

    pub fn samples(&self) -> &[BalanceSample] {
        &self.samples
    }

    pub fn latest(&self) -> Option<&BalanceSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_keeps_order() {
        let start = Local::now();
        let mut history = BalanceHistory::new();
        assert!(history.is_empty());

        history.record(start, Money::zero());
        history.record(start + Duration::seconds(5), Money::from_dollars(100));

        assert_eq!(history.len(), 2);
        assert_eq!(history.samples()[0].balance, Money::zero());
        assert_eq!(history.latest().unwrap().balance, Money::from_dollars(100));
    }
}
