use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::model::calendar::CalendarMonth;
use crate::model::day::DayRecord;
use crate::model::locale::Locale;
use crate::model::report::{CategoryTotal, NamedCount, Report, Streak};
use crate::stats::bucket::bucketize;
use crate::stats::extremum::{extremum, longest, Direction};
use crate::stats::ranges::ranges;

/// Builds the report for every recorded day strictly before `as_of`.
///
/// Days on or after `as_of` haven't happened yet and are ignored entirely.
/// Weekday and month buckets are named with `locale`.
pub fn aggregate(months: &[CalendarMonth], as_of: NaiveDate, locale: Locale) -> Report {
    let mut all: Vec<DayRecord> = months
        .iter()
        .flat_map(|m| m.days.iter().copied())
        .filter(|d| d.date < as_of)
        .collect();
    // Stable, so months given out of order still produce a chronological stream
    all.sort_by_key(|d| d.date);

    let total_days = all.len();
    let occurred_days = all.iter().filter(|d| d.occurred).count();

    let by_day = bucketize(all.iter().copied(), |d| locale.weekday_name(d.date.weekday()));
    let by_month = bucketize(all.iter().copied(), |d| locale.month_name(d.date.month()));

    let counts_by_day = occurred_counts(by_day);
    let counts_by_month = occurred_counts(by_month);

    let streaks: Vec<Streak> = ranges(all, |d| d.occurred).collect();

    Report {
        as_of,
        total_days,
        occurred: CategoryTotal::of(occurred_days, total_days),
        not_occurred: CategoryTotal::of(total_days - occurred_days, total_days),
        best_day: extremum(counts_by_day.iter().cloned(), Direction::Max),
        worst_day: extremum(counts_by_day, Direction::Min),
        best_month: extremum(counts_by_month.iter().cloned(), Direction::Max),
        worst_month: extremum(counts_by_month, Direction::Min),
        longest_occurred: longest(&streaks, true),
        longest_not_occurred: longest(&streaks, false),
    }
}

/// Reduces each bucket to its number of occurred days, in first-seen order.
fn occurred_counts(buckets: HashMap<&'static str, Vec<DayRecord>>) -> Vec<NamedCount> {
    let mut counted: Vec<(NaiveDate, NamedCount)> = buckets
        .into_iter()
        .filter_map(|(name, days)| {
            let first = days.first()?.date;
            let count = days.iter().filter(|d| d.occurred).count() as i64;
            Some((first, NamedCount::new(name, count)))
        })
        .collect();
    counted.sort_by_key(|(first, _)| *first);
    counted.into_iter().map(|(_, named)| named).collect()
}
