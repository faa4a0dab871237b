use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use streakcal_core::{DayRepository, Report};

use crate::format::{bucket_count, bucket_name, labels, percent, streak_span};
use crate::tui::app::App;

const OCCURRED: Color = Color::Red;
const NOT_OCCURRED: Color = Color::Green;
const MUTED: Color = Color::DarkGray;

pub fn draw<R: DayRepository>(f: &mut Frame, app: &App<R>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Month grid
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(size);

    let title = format!("STREAKCAL {}", app.service.range().start.year());
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_month(f, app, main_chunks[1]);

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status, main_chunks[2]);
    }

    let footer = Paragraph::new("h/j/k/l: Move | [/]: Month | Space: Toggle | s: Stats | q: Quit")
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    if let Some(report) = &app.report {
        draw_stats_modal(f, app, report, size);
    }
}

fn draw_month<R: DayRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let Some(month) = app.current_month() else {
        f.render_widget(Paragraph::new("No days in range").alignment(Alignment::Center), area);
        return;
    };
    let locale = app.service.locale();

    let mut cells: Vec<Cell> = vec![Cell::from(""); month.leading_blanks()];
    for day in &month.days {
        let mut style = if app.is_future(day.date) {
            Style::default().fg(MUTED)
        } else if day.occurred {
            Style::default().fg(Color::Black).bg(OCCURRED)
        } else {
            Style::default().fg(NOT_OCCURRED)
        };
        if day.date == app.today {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if day.date == app.selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        cells.push(Cell::from(format!("{:>3}", day.date.day())).style(style));
    }

    let mut rows = Vec::new();
    let mut week = Vec::with_capacity(7);
    for cell in cells {
        week.push(cell);
        if week.len() == 7 {
            rows.push(Row::new(std::mem::take(&mut week)).height(2));
        }
    }
    if !week.is_empty() {
        rows.push(Row::new(week).height(2));
    }

    let header = Row::new(
        locale
            .weekday_abbrevs()
            .iter()
            .map(|a| Cell::from(format!("{:>3}", a))),
    )
    .style(Style::default().fg(Color::Yellow));

    let table = Table::new(rows, [Constraint::Length(5); 7])
        .header(header)
        .block(
            Block::default()
                .title(format!(" {} ", month.name))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    let centered = centered_rect(area, 45, 17);
    f.render_widget(table, centered);
}

fn draw_stats_modal<R: DayRepository>(f: &mut Frame, app: &App<R>, report: &Report, area: Rect) {
    let locale = app.service.locale();
    let l = labels(locale);

    let line = |label: &str, value: String, detail: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<20}", label), Style::default().fg(MUTED)),
            Span::styled(format!("{:<14}", value), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(detail),
        ])
    };

    let text = vec![
        line(
            l.not_occurred_days,
            report.not_occurred.days.to_string(),
            percent(report.not_occurred.percent, locale),
            NOT_OCCURRED,
        ),
        line(
            l.occurred_days,
            report.occurred.days.to_string(),
            percent(report.occurred.percent, locale),
            OCCURRED,
        ),
        Line::from(""),
        line(
            l.not_occurred_streak,
            report.longest_not_occurred.len().to_string(),
            streak_span(&report.longest_not_occurred, locale),
            NOT_OCCURRED,
        ),
        line(
            l.occurred_streak,
            report.longest_occurred.len().to_string(),
            streak_span(&report.longest_occurred, locale),
            OCCURRED,
        ),
        Line::from(""),
        line(l.best_day, bucket_name(&report.best_day, locale), bucket_count(&report.best_day, "x"), OCCURRED),
        line(
            l.best_month,
            bucket_name(&report.best_month, locale),
            bucket_count(&report.best_month, l.days_unit),
            OCCURRED,
        ),
        line(l.worst_day, bucket_name(&report.worst_day, locale), bucket_count(&report.worst_day, "x"), NOT_OCCURRED),
        line(
            l.worst_month,
            bucket_name(&report.worst_month, locale),
            bucket_count(&report.worst_month, l.days_unit),
            NOT_OCCURRED,
        ),
    ];

    let popup = centered_rect(area, 56, 14);
    let modal = Paragraph::new(text).block(
        Block::default()
            .title(" Statistics (Esc to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(modal, popup);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_shrinks() {
        let area = Rect::new(2, 2, 20, 5);
        assert_eq!(centered_rect(area, 40, 10), area);
    }
}
