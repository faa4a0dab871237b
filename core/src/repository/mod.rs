pub mod day;

pub use day::{DayRepository, FileDayRepository};
