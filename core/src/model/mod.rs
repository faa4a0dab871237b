pub mod calendar;
pub mod day;
pub mod locale;
pub mod report;

pub use calendar::{CalendarMonth, DateRange};
pub use day::DayRecord;
pub use locale::Locale;
pub use report::{CategoryTotal, NamedCount, Range, Report, Streak};
