use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::day::DayRecord;
use crate::model::locale::Locale;

/// Half-open date range `[start, end)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Jan 1st through Dec 31st of `year`. `None` for years chrono can't represent.
    pub fn year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days().max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of `date` from the range start, i.e. day-of-year - 1 for a year range.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if self.contains(date) {
            Some((date - self.start).num_days() as usize)
        } else {
            None
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.len() as i64).map(move |offset| self.start + Duration::days(offset))
    }
}

/// Days of one month, keyed by the month's display name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub name: String,
    pub days: Vec<DayRecord>,
}

impl CalendarMonth {
    /// Empty cells before day one in a Monday-first week grid.
    pub fn leading_blanks(&self) -> usize {
        self.days
            .first()
            .map(|d| d.date.weekday().num_days_from_monday() as usize)
            .unwrap_or(0)
    }
}

/// Groups every day of `range` into months in calendar order.
///
/// `flags[i]` is the stored outcome of the i-th day of the range; days beyond
/// the end of `flags` are recorded as not occurred.
pub fn build_months(range: &DateRange, locale: Locale, flags: &[bool]) -> Vec<CalendarMonth> {
    let mut months: Vec<CalendarMonth> = Vec::new();
    let mut current: Option<(i32, u32)> = None;

    for (idx, date) in range.days().enumerate() {
        let key = (date.year(), date.month());
        if current != Some(key) {
            months.push(CalendarMonth {
                name: locale.month_name(date.month()).to_string(),
                days: Vec::new(),
            });
            current = Some(key);
        }
        let occurred = flags.get(idx).copied().unwrap_or(false);
        if let Some(month) = months.last_mut() {
            month.days.push(DayRecord::new(date, occurred));
        }
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_year_range() {
        let range = DateRange::year(2020).unwrap();
        assert_eq!(range.len(), 366);
        assert_eq!(range.index_of(date(2020, 1, 1)), Some(0));
        assert_eq!(range.index_of(date(2020, 12, 31)), Some(365));
        assert_eq!(range.index_of(date(2021, 1, 1)), None);
        assert_eq!(range.index_of(date(2019, 12, 31)), None);
    }

    #[test]
    fn test_build_months() {
        let range = DateRange::year(2020).unwrap();
        let mut flags = vec![false; 366];
        flags[0] = true;
        flags[31] = true; // Feb 1st

        let months = build_months(&range, Locale::Polish, &flags);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].name, "Styczeń");
        assert_eq!(months[0].days.len(), 31);
        assert_eq!(months[1].days.len(), 29);
        assert!(months[0].days[0].occurred);
        assert!(!months[0].days[1].occurred);
        assert!(months[1].days[0].occurred);

        let total: usize = months.iter().map(|m| m.days.len()).sum();
        assert_eq!(total, 366);
    }

    #[test]
    fn test_build_months_short_flags() {
        let range = DateRange::year(2021).unwrap();
        let months = build_months(&range, Locale::English, &[true]);
        assert!(months[0].days[0].occurred);
        assert!(months.iter().flat_map(|m| &m.days).skip(1).all(|d| !d.occurred));
    }

    #[test]
    fn test_leading_blanks() {
        let range = DateRange::year(2020).unwrap();
        let months = build_months(&range, Locale::English, &[]);
        // 2020-01-01 was a Wednesday
        assert_eq!(months[0].leading_blanks(), 2);
        // 2020-06-01 was a Monday
        assert_eq!(months[5].leading_blanks(), 0);
    }
}
