use streakcal_core::{Locale, Report};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::format::{bucket_count, bucket_name, labels, percent, streak_span};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Statistic")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

fn rows(report: &Report, locale: Locale) -> Vec<ReportRow> {
    let l = labels(locale);
    let row = |label: &str, value: String, detail: String| ReportRow {
        label: label.to_string(),
        value,
        detail,
    };

    vec![
        row(
            l.not_occurred_days,
            report.not_occurred.days.to_string(),
            percent(report.not_occurred.percent, locale),
        ),
        row(
            l.occurred_days,
            report.occurred.days.to_string(),
            percent(report.occurred.percent, locale),
        ),
        row(
            l.not_occurred_streak,
            report.longest_not_occurred.len().to_string(),
            streak_span(&report.longest_not_occurred, locale),
        ),
        row(
            l.occurred_streak,
            report.longest_occurred.len().to_string(),
            streak_span(&report.longest_occurred, locale),
        ),
        row(
            l.best_day,
            bucket_name(&report.best_day, locale),
            bucket_count(&report.best_day, "x"),
        ),
        row(
            l.best_month,
            bucket_name(&report.best_month, locale),
            bucket_count(&report.best_month, l.days_unit),
        ),
        row(
            l.worst_day,
            bucket_name(&report.worst_day, locale),
            bucket_count(&report.worst_day, "x"),
        ),
        row(
            l.worst_month,
            bucket_name(&report.worst_month, locale),
            bucket_count(&report.worst_month, l.days_unit),
        ),
    ]
}

pub fn show_report(report: &Report, locale: Locale) {
    println!(
        "\n\x1b[1;36mStatistics before {}\x1b[0m ({} days)",
        report.as_of.format("%Y-%m-%d"),
        report.total_days
    );

    let mut table = Table::new(rows(report, locale));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use streakcal_core::{aggregate, CalendarMonth, DayRecord};

    #[test]
    fn test_rows_for_empty_report() {
        let report = aggregate(&[], NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), Locale::English);
        let rows = rows(&report, Locale::English);

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].value, "0");
        assert_eq!(rows[0].detail, "0.0%");
        assert_eq!(rows[2].detail, "");
        assert_eq!(rows[4].value, "None");
        assert_eq!(rows[4].detail, "-");
    }

    #[test]
    fn test_rows_for_month() {
        let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        let months = vec![CalendarMonth {
            name: "Styczeń".to_string(),
            days: (1..=31).map(|n| DayRecord::new(d(n), n <= 5 || n == 31)).collect(),
        }];
        let report = aggregate(&months, d(31) + chrono::Duration::days(1), Locale::Polish);
        let rows = rows(&report, Locale::Polish);

        assert_eq!(rows[0].label, "Dni niepijących");
        assert_eq!(rows[0].value, "25");
        assert_eq!(rows[3].value, "5");
        assert_eq!(rows[3].detail, "1 Sty - 5 Sty");
        assert_eq!(rows[5].value, "Styczeń");
        assert_eq!(rows[5].detail, "6 dni");
    }
}
