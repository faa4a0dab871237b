pub mod calendar_service;

pub use calendar_service::CalendarService;
