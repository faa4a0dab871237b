pub mod statistics;

#[cfg(test)]
mod statistics_test;

pub use statistics::StatisticsUseCase;
