use chrono::Weekday;
use serde::{Deserialize, Serialize};

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const POLISH_MONTHS: [&str; 12] = [
    "Styczeń", "Luty", "Marzec", "Kwiecień", "Maj", "Czerwiec",
    "Lipiec", "Sierpień", "Wrzesień", "Październik", "Listopad", "Grudzień",
];

// Monday first
const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const POLISH_WEEKDAYS: [&str; 7] = [
    "Poniedziałek", "Wtorek", "Środa", "Czwartek", "Piątek", "Sobota", "Niedziela",
];

/// Language used for month and weekday names.
///
/// The names double as bucket keys for the statistics engine, so every record
/// in one report must be named with the same locale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "pl")]
    Polish,
}

impl Locale {
    /// `month` is 1-based, as returned by `Datelike::month`.
    pub fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::English => ENGLISH_MONTHS[idx],
            Locale::Polish => POLISH_MONTHS[idx],
        }
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_monday() as usize;
        match self {
            Locale::English => ENGLISH_WEEKDAYS[idx],
            Locale::Polish => POLISH_WEEKDAYS[idx],
        }
    }

    /// Two-letter column headers for a Monday-first week grid.
    pub fn weekday_abbrevs(&self) -> [&'static str; 7] {
        match self {
            Locale::English => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            Locale::Polish => ["pn", "wt", "śr", "cz", "pt", "so", "nd"],
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "pl" | "polish" => Some(Locale::Polish),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::English.month_name(1), "January");
        assert_eq!(Locale::Polish.month_name(1), "Styczeń");
        assert_eq!(Locale::Polish.month_name(12), "Grudzień");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Locale::English.weekday_name(Weekday::Mon), "Monday");
        assert_eq!(Locale::Polish.weekday_name(Weekday::Sun), "Niedziela");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Locale::parse("PL"), Some(Locale::Polish));
        assert_eq!(Locale::parse("english"), Some(Locale::English));
        assert_eq!(Locale::parse("klingon"), None);
    }

    #[test]
    fn test_deserialize_accepts_short_names() {
        let short: Locale = serde_json::from_str("\"pl\"").unwrap();
        assert_eq!(short, Locale::Polish);
        let short: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(short, Locale::English);
        let long: Locale = serde_json::from_str("\"polish\"").unwrap();
        assert_eq!(long, Locale::Polish);
    }
}
