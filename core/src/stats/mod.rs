//! Statistics engine: pure functions over day records.

pub mod aggregate;
pub mod bucket;
pub mod extremum;
pub mod ranges;

pub use aggregate::aggregate;
pub use bucket::bucketize;
pub use extremum::{extremum, longest, Direction};
pub use ranges::{ranges, Ranges};
