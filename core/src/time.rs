use chrono::{Datelike, Duration, NaiveDate, Weekday};
use anyhow::{anyhow, Result};

/// Parses a day reference relative to `today`.
///
/// Accepted forms:
/// - `today`/`tod`, `yesterday`/`yest`
/// - `-Nd`, `-Nw` (N days / weeks ago)
/// - a weekday (`fri`, `friday`), meaning the last such day before today;
///   `2:fri` goes one more week back
/// - `YYYY-MM-DD`
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return days_before(today, 1, input),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('-') {
        let (split, unit) = rest
            .char_indices()
            .last()
            .ok_or_else(|| anyhow!("Invalid relative format: {}", input))?;
        let count: i64 = rest[..split]
            .parse()
            .map_err(|_| anyhow!("Invalid relative format: {}", input))?;
        return match unit {
            'd' => days_before(today, count, input),
            'w' => {
                let days = count
                    .checked_mul(7)
                    .ok_or_else(|| anyhow!("Day out of range: {}", input))?;
                days_before(today, days, input)
            }
            _ => Err(anyhow!("Unknown unit in relative day: {}", unit)),
        };
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d);
    }

    if let Some((count, day_str)) = parse_weekday_token(input) {
        if let Ok(target) = parse_weekday_str(day_str) {
            if count < 1 {
                return Err(anyhow!("Weekday count must be positive: {}", input));
            }
            let mut days_back = today.weekday().num_days_from_monday() as i64
                - target.num_days_from_monday() as i64;
            if days_back <= 0 {
                days_back += 7;
            }
            let days_back = (count - 1)
                .checked_mul(7)
                .and_then(|weeks| weeks.checked_add(days_back))
                .ok_or_else(|| anyhow!("Day out of range: {}", input))?;
            return days_before(today, days_back, input);
        }
    }

    Err(anyhow!("Could not parse day: {}", input))
}

fn days_before(today: NaiveDate, days: i64, input: &str) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| today.checked_sub_signed(delta))
        .ok_or_else(|| anyhow!("Day out of range: {}", input))
}

fn parse_weekday_token(input: &str) -> Option<(i64, &str)> {
    if input.contains(':') {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() == 2 {
            if let Ok(count) = parts[0].parse::<i64>() {
                return Some((count, parts[1]));
            }
        }
    } else {
        return Some((1, input));
    }
    None
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday")),
    }
}
