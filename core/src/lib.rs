pub mod config;
pub mod logging;
pub mod model;
pub mod repository;
pub mod service;
pub mod stats;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use model::{CalendarMonth, CategoryTotal, DateRange, DayRecord, Locale, NamedCount, Report, Streak};
pub use repository::{DayRepository, FileDayRepository};
pub use service::CalendarService;
pub use stats::{aggregate, bucketize, extremum, longest, ranges, Direction};
pub use time::parse_day;
pub use usecase::StatisticsUseCase;
