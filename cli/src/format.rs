use streakcal_core::{Locale, NamedCount, Streak};

/// Display strings for the report, per locale.
pub struct Labels {
    pub not_occurred_days: &'static str,
    pub occurred_days: &'static str,
    pub not_occurred_streak: &'static str,
    pub occurred_streak: &'static str,
    pub best_day: &'static str,
    pub best_month: &'static str,
    pub worst_day: &'static str,
    pub worst_month: &'static str,
    pub no_data: &'static str,
    pub days_unit: &'static str,
}

const ENGLISH: Labels = Labels {
    not_occurred_days: "Clean days",
    occurred_days: "Marked days",
    not_occurred_streak: "Clean streak",
    occurred_streak: "Marked streak",
    best_day: "Top weekday",
    best_month: "Top month",
    worst_day: "Quietest weekday",
    worst_month: "Quietest month",
    no_data: "None",
    days_unit: "days",
};

const POLISH: Labels = Labels {
    not_occurred_days: "Dni niepijących",
    occurred_days: "Dni pijących",
    not_occurred_streak: "Streak trzeźwości",
    occurred_streak: "Streak picia",
    best_day: "Dzień do picia",
    best_month: "Pijany miesiąc",
    worst_day: "Dzień nie do picia",
    worst_month: "Trzeźwy miesiąc",
    no_data: "Brak",
    days_unit: "dni",
};

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Polish => &POLISH,
    }
}

/// One decimal place, with the locale's decimal separator.
pub fn percent(value: f64, locale: Locale) -> String {
    let text = format!("{:.1}%", value);
    match locale {
        Locale::English => text,
        Locale::Polish => text.replace('.', ","),
    }
}

pub fn bucket_name(named: &NamedCount, locale: Locale) -> String {
    if named.is_no_data() {
        labels(locale).no_data.to_string()
    } else {
        named.name.clone()
    }
}

/// `unit` follows the count, e.g. `3x` or `3 days`.
pub fn bucket_count(named: &NamedCount, unit: &str) -> String {
    if named.is_no_data() {
        "-".to_string()
    } else if unit == "x" {
        format!("{}x", named.count)
    } else {
        format!("{} {}", named.count, unit)
    }
}

/// First and last day of a streak, e.g. `6 Jan - 30 Jan`; empty for no streak.
pub fn streak_span(streak: &Streak, locale: Locale) -> String {
    match (streak.first_date(), streak.last_date()) {
        (Some(first), Some(last)) => {
            use chrono::Datelike;
            let short = |d: chrono::NaiveDate| {
                let month: String = locale.month_name(d.month()).chars().take(3).collect();
                format!("{} {}", d.day(), month)
            };
            format!("{} - {}", short(first), short(last))
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use streakcal_core::DayRecord;

    #[test]
    fn test_percent() {
        assert_eq!(percent(19.354, Locale::English), "19.4%");
        assert_eq!(percent(19.354, Locale::Polish), "19,4%");
        assert_eq!(percent(0.0, Locale::English), "0.0%");
    }

    #[test]
    fn test_no_data_rendering() {
        let none = NamedCount::no_max();
        assert_eq!(bucket_name(&none, Locale::Polish), "Brak");
        assert_eq!(bucket_count(&none, "x"), "-");
    }

    #[test]
    fn test_bucket_count_units() {
        let named = NamedCount::new("Friday", 4);
        assert_eq!(bucket_count(&named, "x"), "4x");
        assert_eq!(bucket_count(&named, "days"), "4 days");
    }

    #[test]
    fn test_streak_span() {
        let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        let streak = Streak::new(false, (6..=30).map(|n| DayRecord::new(d(n), false)).collect());
        assert_eq!(streak_span(&streak, Locale::English), "6 Jan - 30 Jan");
        assert_eq!(streak_span(&streak, Locale::Polish), "6 Sty - 30 Sty");
        assert_eq!(streak_span(&Streak::empty(true), Locale::English), "");
    }
}
