use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::day::DayRecord;

/// Name used by the "no data" sentinels.
pub const NO_DATA: &str = "None";

/// A bucket reduced to a single count.
///
/// `count` is signed so the empty-input sentinels can sit outside the range
/// of any real count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedCount {
    pub name: String,
    pub count: i64,
}

impl NamedCount {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self { name: name.into(), count }
    }

    /// Starting point for a maximum search; loses to every real count.
    pub fn no_max() -> Self {
        Self::new(NO_DATA, i64::MIN)
    }

    /// Starting point for a minimum search; loses to every real count.
    pub fn no_min() -> Self {
        Self::new(NO_DATA, i64::MAX)
    }

    pub fn is_no_data(&self) -> bool {
        self.count == i64::MIN || self.count == i64::MAX
    }
}

/// A maximal run of consecutive items sharing the same classification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Range<K, T> {
    pub value: K,
    pub items: Vec<T>,
}

impl<K, T> Range<K, T> {
    pub fn new(value: K, items: Vec<T>) -> Self {
        Self { value, items }
    }

    /// A run with no items, used as the "no streak" sentinel.
    pub fn empty(value: K) -> Self {
        Self { value, items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub type Streak = Range<bool, DayRecord>;

impl Streak {
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.items.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.items.last().map(|d| d.date)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryTotal {
    pub days: usize,
    /// 0..=100, zero when there are no eligible days.
    pub percent: f64,
}

impl CategoryTotal {
    pub fn of(days: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            days as f64 / total as f64 * 100.0
        };
        Self { days, percent }
    }
}

/// Everything derived from the recorded history up to an as-of date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub as_of: NaiveDate,
    pub total_days: usize,
    pub occurred: CategoryTotal,
    pub not_occurred: CategoryTotal,
    pub best_day: NamedCount,
    pub worst_day: NamedCount,
    pub best_month: NamedCount,
    pub worst_month: NamedCount,
    pub longest_occurred: Streak,
    pub longest_not_occurred: Streak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_total_guards_zero() {
        let total = CategoryTotal::of(0, 0);
        assert_eq!(total.days, 0);
        assert_eq!(total.percent, 0.0);
    }

    #[test]
    fn test_category_total_percent() {
        let total = CategoryTotal::of(1, 4);
        assert_eq!(total.percent, 25.0);
    }

    #[test]
    fn test_sentinels_are_not_real_counts() {
        assert!(NamedCount::no_max().is_no_data());
        assert!(NamedCount::no_min().is_no_data());
        assert!(!NamedCount::new("Monday", 0).is_no_data());
    }

    #[test]
    fn test_streak_boundaries() {
        let d1 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let streak = Streak::new(true, vec![DayRecord::new(d1, true), DayRecord::new(d2, true)]);
        assert_eq!(streak.first_date(), Some(d1));
        assert_eq!(streak.last_date(), Some(d2));

        let none = Streak::empty(false);
        assert!(none.is_empty());
        assert_eq!(none.first_date(), None);
    }
}
