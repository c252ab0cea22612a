//! Expense Breakdown
//!
//! Splits an account's expense totals into pie slices. Slices run
//! counter-clockwise from [`PIE_START_ANGLE`], in category order, and only
//! categories with spending get one.

use crate::models::{ExpenseCategory, ExpenseSummary, Money};

/// Angle in degrees where the first slice starts
pub const PIE_START_ANGLE: f64 = 140.0;

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Share of the total, in 0.0..=1.0
    pub fraction: f64,
    /// Start angle in degrees, counter-clockwise from the positive x axis
    pub start_angle: f64,
    /// Angular width in degrees
    pub sweep: f64,
}

impl CategorySlice {
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Percentage label, e.g. "33.3%"
    pub fn label(&self) -> String {
        format!("{:.1}%", self.percentage())
    }

    fn contains(&self, angle: f64) -> bool {
        let offset = (angle - self.start_angle).rem_euclid(360.0);
        offset < self.sweep
    }
}

/// Expense totals as pie slices
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBreakdown {
    slices: Vec<CategorySlice>,
    total: Money,
}

impl ExpenseBreakdown {
    /// Build slices from an expense summary
    pub fn from_summary(summary: &ExpenseSummary) -> Self {
        let total = summary.total();
        let mut slices = Vec::new();

        if total.is_positive() {
            let mut angle = PIE_START_ANGLE;
            for (category, amount) in summary.iter().filter(|(_, m)| m.is_positive()) {
                let fraction = amount.cents() as f64 / total.cents() as f64;
                let sweep = fraction * 360.0;
                slices.push(CategorySlice {
                    category,
                    amount,
                    fraction,
                    start_angle: angle.rem_euclid(360.0),
                    sweep,
                });
                angle += sweep;
            }
        }

        Self { slices, total }
    }

    /// True when nothing has been spent
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn slices(&self) -> &[CategorySlice] {
        &self.slices
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// The slice covering `angle` (degrees, counter-clockwise)
    pub fn slice_at(&self, angle: f64) -> Option<&CategorySlice> {
        self.slices
            .iter()
            .find(|s| s.contains(angle))
            .or_else(|| self.slices.last())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(entries: &[(ExpenseCategory, i64)]) -> ExpenseSummary {
        let mut summary = ExpenseSummary::new();
        for (category, cents) in entries {
            summary.record(*category, Money::from_cents(*cents));
        }
        summary
    }

    #[test]
    fn test_empty_when_nothing_spent() {
        let breakdown = ExpenseBreakdown::from_summary(&ExpenseSummary::new());
        assert!(breakdown.is_empty());
        assert!(breakdown.slice_at(0.0).is_none());
    }

    #[test]
    fn test_only_spent_categories_get_slices() {
        let breakdown = ExpenseBreakdown::from_summary(&summary(&[
            (ExpenseCategory::Food, 1500),
            (ExpenseCategory::Personal, 4500),
        ]));

        let categories: Vec<_> = breakdown.slices().iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![ExpenseCategory::Food, ExpenseCategory::Personal]
        );
        assert_eq!(breakdown.slices()[0].label(), "25.0%");
        assert_eq!(breakdown.slices()[1].label(), "75.0%");
        assert_eq!(breakdown.total(), Money::from_cents(6000));
    }

    #[test]
    fn test_labels_use_one_decimal() {
        let breakdown = ExpenseBreakdown::from_summary(&summary(&[
            (ExpenseCategory::Food, 100),
            (ExpenseCategory::Rent, 100),
            (ExpenseCategory::Transport, 100),
        ]));
        assert_eq!(breakdown.slices()[0].label(), "33.3%");
    }

    #[test]
    fn test_slices_cover_the_circle() {
        let breakdown = ExpenseBreakdown::from_summary(&summary(&[
            (ExpenseCategory::Food, 100),
            (ExpenseCategory::Rent, 300),
        ]));

        let total_sweep: f64 = breakdown.slices().iter().map(|s| s.sweep).sum();
        assert!((total_sweep - 360.0).abs() < 1e-9);

        assert_eq!(breakdown.slices()[0].start_angle, PIE_START_ANGLE);
        // Food spans 140..230, Rent the rest
        assert_eq!(
            breakdown.slice_at(180.0).unwrap().category,
            ExpenseCategory::Food
        );
        assert_eq!(
            breakdown.slice_at(0.0).unwrap().category,
            ExpenseCategory::Rent
        );
        assert_eq!(
            breakdown.slice_at(139.0).unwrap().category,
            ExpenseCategory::Rent
        );
    }
}
