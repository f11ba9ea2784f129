//! Error types for civil-date and hour-block handling.

use thiserror::Error;

/// Errors from birth-date validation or hour-block conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple is not a valid proleptic Gregorian date.
    #[error("invalid civil date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Two-hour block index outside 0..=11.
    #[error("hour block index {0} out of range (0-11)")]
    InvalidHourBlock(u8),
    /// Clock hour outside 0..=23.
    #[error("clock hour {0} out of range (0-23)")]
    InvalidClockHour(u32),
    /// Text could not be parsed as `YYYY-MM-DD`.
    #[error("cannot parse date: {0}")]
    Parse(String),
}
