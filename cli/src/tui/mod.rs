pub mod app;
pub mod ui;

use std::io;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use streakcal_core::{CalendarService, DayRepository};

use crate::tui::app::App;

pub fn run<R: DayRepository>(service: CalendarService<R>, today: NaiveDate) -> Result<()> {
    let mut app = App::new(service, today)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, R: DayRepository>(terminal: &mut Terminal<B>, app: &mut App<R>) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.report.is_some() {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => app.close_stats(),
                        _ => {}
                    }
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left | KeyCode::Char('h') => app.move_days(-1),
                    KeyCode::Right | KeyCode::Char('l') => app.move_days(1),
                    KeyCode::Up | KeyCode::Char('k') => app.move_days(-7),
                    KeyCode::Down | KeyCode::Char('j') => app.move_days(7),
                    KeyCode::Char('[') | KeyCode::PageUp => app.move_months(-1),
                    KeyCode::Char(']') | KeyCode::PageDown => app.move_months(1),
                    KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
                    KeyCode::Char('s') => app.open_stats(),
                    _ => {}
                }
            }
        }
    }
}
