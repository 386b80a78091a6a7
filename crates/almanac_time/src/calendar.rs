//! Proleptic Julian/Gregorian calendar dates.
//!
//! Dates before 1582-10-05 follow Julian rules, dates from 1582-10-15 on
//! follow Gregorian rules, and the ten days in between do not exist.
//! Years use astronomical numbering: year 0 is 1 BCE, year -1 is 2 BCE.

use std::fmt;

use crate::error::TimeError;
use crate::julian::{JulianDay, calendar_to_jd};

/// First Julian Day Number (at noon) counted in the Gregorian calendar.
pub const GREGORIAN_REFORM_JD: f64 = 2_299_161.0;

/// Last Julian calendar day before the reform: 1582-10-04.
const LAST_JULIAN_DAY: (i32, u32, u32) = (1582, 10, 4);

/// First Gregorian calendar day after the reform: 1582-10-15.
const FIRST_GREGORIAN_DAY: (i32, u32, u32) = (1582, 10, 15);

/// Calendar system a date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Julian,
    Gregorian,
}

/// Which calendar applies at a Julian Day Number.
///
/// `jd < 2299161` is Julian, everything else Gregorian.
pub fn calendar_of_jd(jd: f64) -> Calendar {
    if jd < GREGORIAN_REFORM_JD {
        Calendar::Julian
    } else {
        Calendar::Gregorian
    }
}

/// Which calendar applies to a civil date.
///
/// Fails for 1582-10-05 ..= 1582-10-14.
pub fn calendar_of_date(year: i32, month: u32, day: u32) -> Result<Calendar, TimeError> {
    reform_side(year, month, day).ok_or_else(|| {
        TimeError::invalid_date(
            year,
            month,
            day,
            "dropped by the Gregorian reform (1582-10-05 to 1582-10-14)",
        )
    })
}

/// `None` inside the reform gap.
fn reform_side(year: i32, month: u32, day: u32) -> Option<Calendar> {
    let date = (year, month, day);
    if date <= LAST_JULIAN_DAY {
        Some(Calendar::Julian)
    } else if date >= FIRST_GREGORIAN_DAY {
        Some(Calendar::Gregorian)
    } else {
        None
    }
}

/// Leap-year rule of the given calendar.
///
/// Julian: every fourth year. Gregorian: every fourth year except
/// centuries not divisible by 400.
pub fn is_leap_year(year: i32, calendar: Calendar) -> bool {
    let by4 = year.rem_euclid(4) == 0;
    match calendar {
        Calendar::Julian => by4,
        Calendar::Gregorian => by4 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0),
    }
}

/// Number of days in `month` (1..=12) of `year` under `calendar`.
///
/// October 1582 is reported with its full 31 days; the gap is rejected
/// separately by [`calendar_of_date`].
pub fn days_in_month(year: i32, month: u32, calendar: Calendar) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year, calendar) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Ordinal day of the year (1-based) without a month table.
///
/// `N = INT(275·M/9) − K·INT((M+9)/12) + D − 30`, `K = 1` in leap years else 2.
///
/// # Panics
/// Panics unless `month` is 1-12 and `day` is at least 1.
pub fn day_of_year(month: u32, day: u32, leap: bool) -> u32 {
    assert!(
        (1..=12).contains(&month) && day >= 1,
        "day_of_year needs month 1-12 and day >= 1, got {month}/{day}"
    );
    let k = if leap { 1 } else { 2 };
    275 * month / 9 - k * ((month + 9) / 12) + day - 30
}

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays in index order.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Weekday for an index, taken modulo 7.
    pub const fn from_index(index: i64) -> Self {
        ALL_WEEKDAYS[index.rem_euclid(7) as usize]
    }

    /// 0 = Sunday ..= 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated calendar date and clock time.
///
/// The calendar (Julian or Gregorian) is implied by the date itself.
/// Construct with [`CalendarDate::new`] or from a [`JulianDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl CalendarDate {
    /// Build a date, rejecting nonexistent days and out-of-range clock fields.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::invalid_date(year, month, day, "month must be 1-12"));
        }
        let calendar = calendar_of_date(year, month, day)?;
        if day == 0 || day > days_in_month(year, month, calendar) {
            return Err(TimeError::invalid_date(
                year,
                month,
                day,
                "day out of range for month",
            ));
        }
        if hour >= 24 || minute >= 60 || second >= 60 || millisecond >= 1000 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        Ok(Self::from_parts_unchecked(
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        ))
    }

    /// Midnight at the start of a date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Fields produced by the Julian Day back-solve are always valid.
    pub(crate) const fn from_parts_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
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

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> u32 {
        self.second
    }

    pub const fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// Calendar this date is expressed in.
    pub fn calendar(&self) -> Calendar {
        // Constructed dates are never inside the gap.
        reform_side(self.year, self.month, self.day).unwrap_or(Calendar::Gregorian)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year, self.calendar())
    }

    /// Ordinal day of the year, 1 = January 1st.
    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.month, self.day, self.is_leap_year())
    }

    /// Length of this date's year in days (365 or 366).
    pub fn year_length(&self) -> u32 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Day of the month plus the clock time as a fraction of a day.
    pub fn day_fraction(&self) -> f64 {
        let mut d = self.day as f64;
        d += self.hour as f64 / 24.0;
        d += (self.minute as f64 / 60.0) / 24.0;
        d += ((self.second as f64 / 60.0) / 60.0) / 24.0;
        d += (((self.millisecond as f64 / 1000.0) / 60.0) / 60.0) / 24.0;
        d
    }

    /// Clock time in hours since midnight.
    pub fn hours_since_midnight(&self) -> f64 {
        self.hour as f64
            + self.minute as f64 / 60.0
            + (self.second as f64 + self.millisecond as f64 / 1000.0) / 3600.0
    }

    /// Same date at 0h.
    pub const fn midnight(&self) -> Self {
        Self::from_parts_unchecked(self.year, self.month, self.day, 0, 0, 0, 0)
    }

    /// Continuous day count for this date.
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay::from_jd(calendar_to_jd(self))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}
