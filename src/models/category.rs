//! Expense categories
//!
//! The category set is closed: every account tracks exactly these four
//! buckets, in this order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;

/// A spending bucket for expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Rent,
    Transport,
    Personal,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 4] = [Self::Food, Self::Rent, Self::Transport, Self::Personal];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Transport => "Transport",
            Self::Personal => "Personal",
        }
    }

    /// Parse a category from its name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }

    /// Position in [`ExpenseCategory::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Food => 0,
            Self::Rent => 1,
            Self::Transport => 2,
            Self::Personal => 3,
        }
    }

    /// The next category, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        Self::Food
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulated spend per category
///
/// Always holds an entry for every category, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    totals: BTreeMap<ExpenseCategory, Money>,
}

impl ExpenseSummary {
    pub fn new() -> Self {
        Self {
            totals: ExpenseCategory::ALL
                .into_iter()
                .map(|c| (c, Money::zero()))
                .collect(),
        }
    }

    /// Accumulated spend for a category
    pub fn get(&self, category: ExpenseCategory) -> Money {
        self.totals.get(&category).copied().unwrap_or_default()
    }

    /// Add to a category's accumulated spend
    pub fn record(&mut self, category: ExpenseCategory, amount: Money) {
        *self.totals.entry(category).or_default() += amount;
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.totals.values().sum()
    }

    /// True when nothing has been spent in any category
    pub fn is_all_zero(&self) -> bool {
        self.totals.values().all(Money::is_zero)
    }

    /// Iterate in category order
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Money)> + '_ {
        self.totals.iter().map(|(c, m)| (*c, *m))
    }
}

impl Default for ExpenseSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(ExpenseCategory::parse("food"), Some(ExpenseCategory::Food));
        assert_eq!(ExpenseCategory::parse(" RENT "), Some(ExpenseCategory::Rent));
        assert_eq!(ExpenseCategory::parse("Groceries"), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(ExpenseCategory::Personal.next(), ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::Food.prev(), ExpenseCategory::Personal);
        assert_eq!(ExpenseCategory::Rent.next(), ExpenseCategory::Transport);
    }

    #[test]
    fn test_summary_starts_with_all_categories_at_zero() {
        let summary = ExpenseSummary::new();
        assert_eq!(summary.iter().count(), 4);
        assert!(summary.is_all_zero());
        assert_eq!(summary.total(), Money::zero());
    }

    #[test]
    fn test_summary_record() {
        let mut summary = ExpenseSummary::new();
        summary.record(ExpenseCategory::Food, Money::from_cents(1500));
        summary.record(ExpenseCategory::Food, Money::from_cents(500));
        summary.record(ExpenseCategory::Rent, Money::from_cents(70000));

        assert_eq!(summary.get(ExpenseCategory::Food).cents(), 2000);
        assert_eq!(summary.get(ExpenseCategory::Transport), Money::zero());
        assert_eq!(summary.total().cents(), 72000);
        assert!(!summary.is_all_zero());
    }

    #[test]
    fn test_summary_iterates_in_display_order() {
        let summary = ExpenseSummary::new();
        let order: Vec<_> = summary.iter().map(|(c, _)| c).collect();
        assert_eq!(order, ExpenseCategory::ALL.to_vec());
    }
}
