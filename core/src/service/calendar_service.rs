use crate::model::calendar::{build_months, CalendarMonth, DateRange};
use crate::model::locale::Locale;
use crate::repository::DayRepository;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// The tracked calendar: a fixed date range backed by a `DayRepository`.
pub struct CalendarService<R: DayRepository> {
    repo: R,
    range: DateRange,
    locale: Locale,
}

impl<R: DayRepository> CalendarService<R> {
    pub fn new(repo: R, range: DateRange, locale: Locale) -> Self {
        Self { repo, range, locale }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// All months of the range in calendar order, with the stored outcomes.
    pub fn months(&self) -> Result<Vec<CalendarMonth>> {
        let flags = self.repo.load()?;
        tracing::debug!(stored = flags.len(), days = self.range.len(), "Loaded day flags");
        Ok(build_months(&self.range, self.locale, &flags))
    }

    pub fn get(&self, date: NaiveDate) -> Result<bool> {
        let idx = self.index_of(date)?;
        Ok(self.repo.load()?.get(idx).copied().unwrap_or(false))
    }

    pub fn set(&self, date: NaiveDate, occurred: bool) -> Result<()> {
        self.update(date, |_| occurred)?;
        Ok(())
    }

    /// Flips the outcome of `date` and returns the new value.
    pub fn toggle(&self, date: NaiveDate) -> Result<bool> {
        self.update(date, |current| !current)
    }

    /// One load, one save: applies `change` to the stored flag of `date`.
    fn update(&self, date: NaiveDate, change: impl FnOnce(bool) -> bool) -> Result<bool> {
        let idx = self.index_of(date)?;
        let mut flags = self.repo.load()?;
        if flags.len() < self.range.len() {
            flags.resize(self.range.len(), false);
        }
        let occurred = change(flags[idx]);
        flags[idx] = occurred;
        self.repo.save(&flags)?;
        tracing::info!(%date, occurred, "Day updated");
        Ok(occurred)
    }

    fn index_of(&self, date: NaiveDate) -> Result<usize> {
        self.range.index_of(date).ok_or_else(|| {
            anyhow!(
                "{} is outside the tracked range {} - {}",
                date,
                self.range.start,
                self.range.end.pred_opt().unwrap_or(self.range.end)
            )
        })
    }
}
