#[cfg(test)]
mod tests {
    use crate::model::calendar::DateRange;
    use crate::model::locale::Locale;
    use crate::repository::DayRepository;
    use crate::service::calendar_service::CalendarService;
    use crate::usecase::statistics::StatisticsUseCase;
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;

    struct MockDayRepo {
        flags: Vec<bool>,
    }

    impl DayRepository for MockDayRepo {
        fn load(&self) -> Result<Vec<bool>> { Ok(self.flags.clone()) }
        fn save(&self, _flags: &[bool]) -> Result<()> { unimplemented!() }
    }

    struct BrokenDayRepo;

    impl DayRepository for BrokenDayRepo {
        fn load(&self) -> Result<Vec<bool>> { Err(anyhow!("disk on fire")) }
        fn save(&self, _flags: &[bool]) -> Result<()> { unimplemented!() }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_report_for_first_week_of_year() {
        crate::logging::init_test();

        // 2020: Jan 1st, 2nd and 4th marked, checked on Jan 8th
        let mut flags = vec![false; 366];
        flags[0] = true;
        flags[1] = true;
        flags[3] = true;
        // After the as-of date, must not count
        flags[10] = true;

        let service = CalendarService::new(
            MockDayRepo { flags },
            DateRange::year(2020).unwrap(),
            Locale::Polish,
        );
        let usecase = StatisticsUseCase::new(&service);
        let report = usecase.report(date(2020, 1, 8)).unwrap();

        assert_eq!(report.total_days, 7);
        assert_eq!(report.occurred.days, 3);
        assert_eq!(report.not_occurred.days, 4);
        assert_eq!(report.best_month.name, "Styczeń");
        assert_eq!(report.best_month.count, 3);
        // Wednesday (Jan 1st) is the first weekday seen with one marked day
        assert_eq!(report.best_day.name, "Środa");
        assert_eq!(report.best_day.count, 1);
        assert_eq!(report.longest_occurred.len(), 2);
        // Jan 5th ..= Jan 7th
        assert_eq!(report.longest_not_occurred.len(), 3);
        assert_eq!(report.longest_not_occurred.first_date(), Some(date(2020, 1, 5)));
    }

    #[test]
    fn test_report_propagates_store_errors() {
        let service = CalendarService::new(
            BrokenDayRepo,
            DateRange::year(2020).unwrap(),
            Locale::English,
        );
        let usecase = StatisticsUseCase::new(&service);
        let err = usecase.report(date(2020, 6, 1)).unwrap_err();
        assert!(err.to_string().contains("disk on fire"));
    }
}
