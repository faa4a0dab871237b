use crate::model::report::Report;
use crate::repository::DayRepository;
use crate::service::calendar_service::CalendarService;
use crate::stats::aggregate;
use anyhow::Result;
use chrono::NaiveDate;

/// Produces the statistics report for the tracked calendar.
pub struct StatisticsUseCase<'a, R: DayRepository> {
    calendar: &'a CalendarService<R>,
}

impl<'a, R: DayRepository> StatisticsUseCase<'a, R> {
    pub fn new(calendar: &'a CalendarService<R>) -> Self {
        Self { calendar }
    }

    /// `as_of` is the first day that does not count yet, normally today.
    pub fn report(&self, as_of: NaiveDate) -> Result<Report> {
        let months = self.calendar.months()?;
        let report = aggregate(&months, as_of, self.calendar.locale());
        tracing::debug!(
            %as_of,
            total = report.total_days,
            occurred = report.occurred.days,
            longest_occurred = report.longest_occurred.len(),
            longest_not_occurred = report.longest_not_occurred.len(),
            "Statistics aggregated"
        );
        Ok(report)
    }
}
