//! Error types for calendar and Julian Day conversions.

use thiserror::Error;

/// Errors from building a calendar date or a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The date does not exist: month or day out of range, or one of the
    /// ten days dropped by the Gregorian reform (1582-10-05 ..= 1582-10-14).
    #[error("invalid date {year}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: &'static str,
    },
    /// Hour, minute, second or millisecond out of range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },
}

impl TimeError {
    pub(crate) const fn invalid_date(year: i32, month: u32, day: u32, reason: &'static str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            reason,
        }
    }
}
