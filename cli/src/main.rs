mod calendar;
mod format;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use streakcal_core::{
    logging, parse_day, CalendarService, Config, FileDayRepository, Locale, StatisticsUseCase,
};

#[derive(Parser)]
#[command(name = "streakcal")]
#[command(about = "A one-year calendar for tracking a yes/no daily event", long_about = None)]
struct Cli {
    /// Tracked year (defaults to the config file, then the current year)
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Month and weekday names: english or polish
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Directory holding days.json and the log file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui,
    /// Print every month of the tracked year
    Show,
    /// Flip a day (usage: toggle yesterday, toggle 2020-03-01, toggle -2d, toggle fri)
    Toggle {
        day: String,
    },
    /// Set a day explicitly (usage: set today yes)
    Set {
        day: String,
        /// yes/no
        value: String,
    },
    /// Show statistics for every day before --as-of (default: through today)
    Stats {
        #[arg(long)]
        as_of: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "tak" => Ok(true),
        "n" | "no" | "false" | "0" | "nie" => Ok(false),
        _ => Err(anyhow!("Expected yes or no, got '{}'", value)),
    }
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
    if let Some(year) = cli.year {
        config.year = Some(year);
    }
    if let Some(locale) = &cli.locale {
        config.locale = Locale::parse(locale).ok_or_else(|| anyhow!("Unknown locale: {}", locale))?;
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = apply_overrides(Config::load()?, &cli)?;
    let today: NaiveDate = Local::now().date_naive();

    let data_dir = config.data_dir()?;
    let _log_guard = logging::init(&config.logging, &data_dir)?;

    let range = config.date_range(today)?;
    let repo = FileDayRepository::new(Some(data_dir), range.len())?;
    let service = CalendarService::new(repo, range, config.locale);

    match cli.command {
        Some(Commands::Show) => {
            let months = service.months()?;
            calendar::show_calendar(&months, config.locale, today);
        }
        Some(Commands::Toggle { day }) => {
            let date = parse_day(&day, today)?;
            let occurred = service.toggle(date)?;
            println!("{}: {}", date, if occurred { "marked" } else { "cleared" });
        }
        Some(Commands::Set { day, value }) => {
            let date = parse_day(&day, today)?;
            let occurred = parse_flag(&value)?;
            service.set(date, occurred)?;
            println!("{}: {}", date, if occurred { "marked" } else { "cleared" });
        }
        Some(Commands::Stats { as_of, json }) => {
            let as_of = match as_of {
                Some(input) => parse_day(&input, today)?,
                None => today + Duration::days(1),
            };
            let report = StatisticsUseCase::new(&service).report(as_of)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::show_report(&report, config.locale);
            }
        }
        Some(Commands::Tui) | None => {
            tui::run(service, today)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("Yes").unwrap());
        assert!(parse_flag("tak").unwrap());
        assert!(!parse_flag("no").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["streakcal", "--year", "2020", "--locale", "pl", "stats", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Stats { json: true, .. })));

        let config = apply_overrides(Config::default(), &cli).unwrap();
        assert_eq!(config.locale, Locale::Polish);
        assert_eq!(config.year, Some(2020));
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let cli = Cli::parse_from(["streakcal", "--locale", "klingon", "show"]);
        assert!(apply_overrides(Config::default(), &cli).is_err());
    }
}
