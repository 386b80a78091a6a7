//! Error type for calendar event computations.

use almanac_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EventError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("year {year} is before the earliest supported year {min}")]
    YearOutOfRange { year: i32, min: i32 },
    #[error("invalid Islamic date {year}-{month:02}-{day:02}")]
    InvalidIslamicDate { year: i32, month: u32, day: u32 },
}
