//! Calendar events expressed as Julian Days.
//!
//! This crate provides:
//! - Easter Sunday (Julian rule through 1582, Gregorian after)
//! - First day of Pesach by Gauss's formula
//! - Arithmetical Islamic calendar conversion

pub mod easter;
pub mod error;
pub mod islamic;
pub mod pesach;

pub use easter::{LAST_JULIAN_EASTER_YEAR, easter, easter_month_day};
pub use error::EventError;
pub use islamic::{ISLAMIC_EPOCH_JD, IslamicDate, is_islamic_leap_year, islamic_month_length};
pub use pesach::{FIRST_HEBREW_YEAR, hebrew_year, pesach, pesach_month_day};
