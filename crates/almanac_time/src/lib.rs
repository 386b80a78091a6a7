//! Julian Day Numbers, proleptic calendars and sidereal time.
//!
//! This crate provides:
//! - Calendar date ↔ Julian Day Number conversion across the 1582 reform
//! - Calendar selection, leap years, day of year and day of week
//! - A [`JulianDay`] value type with day/minute/second arithmetic
//! - Mean sidereal time at Greenwich and a wrapped [`TimeOfDay`] clock

pub mod calendar;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod time_of_day;

pub use calendar::{
    ALL_WEEKDAYS, Calendar, CalendarDate, GREGORIAN_REFORM_JD, Weekday, calendar_of_date,
    calendar_of_jd, day_of_year, days_in_month, is_leap_year,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000_JD, JulianDay, MINUTES_PER_DAY,
    SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, day_of_week, jd_to_calendar,
};
pub use sidereal::{
    SIDEREAL_RATE, mean_sidereal_time, mean_sidereal_time_at_midnight, mean_sidereal_time_deg,
    sidereal_time_at,
};
pub use time_of_day::TimeOfDay;
