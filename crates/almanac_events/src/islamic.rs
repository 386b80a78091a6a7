//! Arithmetical Islamic (Hijri) calendar.
//!
//! Months alternate 30 and 29 days, with a 30th day added to Dhu al-Hijja
//! in 11 years of every 30. Epoch 1 Muharram 1 AH = Julian 622 July 16.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 9;
//! Reingold & Dershowitz, *Calendrical Calculations*, §7.1.

use std::fmt;

use almanac_math::{floor_div, floor_to_int};
use almanac_time::JulianDay;
use tracing::trace;

use crate::error::EventError;

/// JD at 0h of 1 Muharram 1 AH.
pub const ISLAMIC_EPOCH_JD: f64 = 1_948_439.5;

/// Days in a 30-year cycle.
const DAYS_PER_CYCLE: i64 = 10_631;

/// Whether `year` AH has 355 days.
pub fn is_islamic_leap_year(year: i32) -> bool {
    (14 + 11 * year as i64).rem_euclid(30) < 11
}

/// Days in `month` of `year` AH.
pub fn islamic_month_length(year: i32, month: u32) -> u32 {
    if month % 2 == 1 || (month == 12 && is_islamic_leap_year(year)) {
        30
    } else {
        29
    }
}

/// A date in the arithmetical Islamic calendar (AH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IslamicDate {
    year: i32,
    month: u32,
    day: u32,
}

impl IslamicDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, EventError> {
        if !(1..=12).contains(&month) || day == 0 || day > islamic_month_length(year, month) {
            return Err(EventError::InvalidIslamicDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Days from the epoch to this date.
    fn days_since_epoch(&self) -> i64 {
        let y = self.year as i64;
        let m = self.month as i64;
        (y - 1) * 354 + floor_div(3 + 11 * y, 30) + 29 * (m - 1) + floor_div(m, 2) + self.day as i64
            - 1
    }

    /// The date at 0h.
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay::from_jd(ISLAMIC_EPOCH_JD + self.days_since_epoch() as f64)
    }

    /// The Islamic date containing the instant `jd`. The Islamic day is
    /// taken to run midnight to midnight.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        let days = floor_to_int(jd.jd() - ISLAMIC_EPOCH_JD);
        let year = floor_div(30 * days + 10_646, DAYS_PER_CYCLE) as i32;
        let new_year = Self {
            year,
            month: 1,
            day: 1,
        };
        let prior = days - new_year.days_since_epoch();
        let month = floor_div(11 * prior + 330, 325) as u32;
        let first = Self {
            year,
            month,
            day: 1,
        };
        let day = (days - first.days_since_epoch() + 1) as u32;
        trace!(jd = jd.jd(), days, year, prior, month, day, "islamic date");
        Self { year, month, day }
    }
}

impl From<IslamicDate> for JulianDay {
    fn from(date: IslamicDate) -> Self {
        date.to_julian_day()
    }
}

impl From<JulianDay> for IslamicDate {
    fn from(jd: JulianDay) -> Self {
        Self::from_julian_day(jd)
    }
}

impl fmt::Display for IslamicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}
