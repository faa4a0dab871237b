use chrono::{Datelike, NaiveDate};
use streakcal_core::{CalendarMonth, Locale};
use unicode_width::UnicodeWidthStr;

const CELL_WIDTH: usize = 3;
const GRID_WIDTH: usize = CELL_WIDTH * 7;

/// Centers `text` in `width` terminal columns.
fn center(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Text grid for one month: marked days get a `*`, future days a `.`.
pub fn month_lines(month: &CalendarMonth, locale: Locale, today: NaiveDate) -> Vec<String> {
    let mut lines = vec![center(&month.name, GRID_WIDTH)];
    lines.push(
        locale
            .weekday_abbrevs()
            .iter()
            .map(|abbrev| center(abbrev, CELL_WIDTH))
            .collect::<String>(),
    );

    let mut cells: Vec<String> = vec![" ".repeat(CELL_WIDTH); month.leading_blanks()];
    for day in &month.days {
        let cell = if day.date > today {
            format!("{:>2}.", day.date.day())
        } else if day.occurred {
            format!("{:>2}*", day.date.day())
        } else {
            format!("{:>2} ", day.date.day())
        };
        cells.push(cell);
    }

    for week in cells.chunks(7) {
        lines.push(week.concat());
    }
    lines
}

pub fn show_calendar(months: &[CalendarMonth], locale: Locale, today: NaiveDate) {
    for pair in months.chunks(3) {
        let grids: Vec<Vec<String>> = pair.iter().map(|m| month_lines(m, locale, today)).collect();
        let height = grids.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..height {
            let line: Vec<String> = grids
                .iter()
                .map(|g| {
                    let cell = g.get(row).map(String::as_str).unwrap_or("");
                    let pad = GRID_WIDTH.saturating_sub(UnicodeWidthStr::width(cell));
                    format!("{}{}", cell, " ".repeat(pad))
                })
                .collect();
            println!("{}", line.join("   "));
        }
        println!();
    }
}
