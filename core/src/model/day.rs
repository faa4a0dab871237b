use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// One calendar day and whether the tracked event happened on it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub occurred: bool,
}

impl DayRecord {
    pub fn new(date: NaiveDate, occurred: bool) -> Self {
        Self { date, occurred }
    }
}
