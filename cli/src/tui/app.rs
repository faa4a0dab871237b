use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use streakcal_core::{CalendarMonth, CalendarService, DayRepository, Report, StatisticsUseCase};

pub struct App<R: DayRepository> {
    pub service: CalendarService<R>,
    pub months: Vec<CalendarMonth>,
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub report: Option<Report>,
    pub status: Option<String>,
}

impl<R: DayRepository> App<R> {
    pub fn new(service: CalendarService<R>, today: NaiveDate) -> Result<Self> {
        let months = service.months()?;
        let range = service.range();
        let selected = if range.contains(today) {
            today
        } else {
            range.start
        };
        Ok(Self {
            service,
            months,
            selected,
            today,
            report: None,
            status: None,
        })
    }

    /// The month holding the cursor.
    pub fn current_month(&self) -> Option<&CalendarMonth> {
        self.months
            .iter()
            .find(|m| m.days.iter().any(|d| d.date == self.selected))
    }

    pub fn is_future(&self, date: NaiveDate) -> bool {
        date > self.today
    }

    pub fn move_days(&mut self, days: i64) {
        let target = self.selected + Duration::days(days);
        if self.service.range().contains(target) {
            self.selected = target;
        }
    }

    /// Jumps to the same day in another month, clamped to that month's length.
    pub fn move_months(&mut self, months: i32) {
        let total = self.selected.year() * 12 + self.selected.month0() as i32 + months;
        let (year, month0) = (total.div_euclid(12), total.rem_euclid(12) as u32);
        let target = (1..=self.selected.day())
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(year, month0 + 1, day));
        if let Some(target) = target {
            if self.service.range().contains(target) {
                self.selected = target;
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        if self.is_future(self.selected) {
            self.status = Some(format!("{} hasn't happened yet", self.selected));
            return;
        }
        match self.service.toggle(self.selected) {
            Ok(_) => {
                self.status = None;
                self.reload();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Toggle failed");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn open_stats(&mut self) {
        let usecase = StatisticsUseCase::new(&self.service);
        match usecase.report(self.today + Duration::days(1)) {
            Ok(report) => self.report = Some(report),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn close_stats(&mut self) {
        self.report = None;
    }

    fn reload(&mut self) {
        match self.service.months() {
            Ok(months) => self.months = months,
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}
