//! Balance Trend
//!
//! Turns a balance history into chart coordinates: x is seconds since the
//! first sample, y is the balance in currency units.

use chrono::{DateTime, Local};

use crate::models::{BalanceHistory, Money};

/// Chart-ready balance series
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceTrend {
    points: Vec<(f64, f64)>,
    first: DateTime<Local>,
    last: DateTime<Local>,
    low: Money,
    high: Money,
}

impl BalanceTrend {
    /// Build the series; `None` when there are no samples
    pub fn from_history(history: &BalanceHistory) -> Option<Self> {
        let samples = history.samples();
        let first = samples.first()?;
        let last = samples.last()?;

        let points = samples
            .iter()
            .map(|s| {
                let elapsed = (s.timestamp - first.timestamp).num_milliseconds() as f64 / 1000.0;
                (elapsed, s.balance.to_f64())
            })
            .collect();

        let low = samples.iter().map(|s| s.balance).min()?;
        let high = samples.iter().map(|s| s.balance).max()?;

        Some(Self {
            points,
            first: first.timestamp,
            last: last.timestamp,
            low,
            high,
        })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn low(&self) -> Money {
        self.low
    }

    pub fn high(&self) -> Money {
        self.high
    }

    /// X axis range; at least one second wide so a single sample still plots
    pub fn x_bounds(&self) -> [f64; 2] {
        let end = self.points.last().map(|p| p.0).unwrap_or(0.0);
        [0.0, end.max(1.0)]
    }

    /// Y axis range padded by a tenth of the span, or by one unit when flat
    pub fn y_bounds(&self) -> [f64; 2] {
        let low = self.low.to_f64();
        let high = self.high.to_f64();
        let span = high - low;
        let pad = if span < 0.01 { 1.0_f64.max(high.abs() * 0.1) } else { span * 0.1 };
        [low - pad, high + pad]
    }

    /// Timestamps for the start, middle and end of the x axis
    pub fn time_labels(&self, format: &str) -> [String; 3] {
        let middle = self.first + (self.last - self.first) / 2;
        [
            self.first.format(format).to_string(),
            middle.format(format).to_string(),
            self.last.format(format).to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn history(balances: &[(i64, i64)]) -> BalanceHistory {
        let start = Local.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let mut history = BalanceHistory::new();
        for (secs, cents) in balances {
            history.record(start + Duration::seconds(*secs), Money::from_cents(*cents));
        }
        history
    }

    #[test]
    fn test_empty_history_has_no_trend() {
        assert!(BalanceTrend::from_history(&BalanceHistory::new()).is_none());
    }

    #[test]
    fn test_points_relative_to_first_sample() {
        let trend = BalanceTrend::from_history(&history(&[(0, 0), (30, 10000), (60, 6000)])).unwrap();

        assert_eq!(trend.points(), &[(0.0, 0.0), (30.0, 100.0), (60.0, 60.0)]);
        assert_eq!(trend.x_bounds(), [0.0, 60.0]);
        assert_eq!(trend.low(), Money::zero());
        assert_eq!(trend.high(), Money::from_dollars(100));

        let [low, high] = trend.y_bounds();
        assert!((low - -10.0).abs() < 1e-9);
        assert!((high - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample_bounds() {
        let trend = BalanceTrend::from_history(&history(&[(0, 5000)])).unwrap();
        assert_eq!(trend.len(), 1);
        assert_eq!(trend.x_bounds(), [0.0, 1.0]);
        let [low, high] = trend.y_bounds();
        assert!(low < 50.0 && high > 50.0);
    }

    #[test]
    fn test_time_labels() {
        let trend = BalanceTrend::from_history(&history(&[(0, 0), (120, 100)])).unwrap();
        assert_eq!(
            trend.time_labels("%H:%M"),
            ["09:00".to_string(), "09:01".to_string(), "09:02".to_string()]
        );
    }
}
