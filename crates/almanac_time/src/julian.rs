//! Julian Day Number ↔ calendar conversions.
//!
//! Algorithms from Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.
//! The JDN counts days from noon of -4712-01-01 in the proleptic Julian
//! calendar. The back-solve floors throughout, so days before that epoch
//! (negative JD) convert too.

use std::fmt;
use std::ops::{Add, Sub};
use std::time::{SystemTime, UNIX_EPOCH};

use almanac_math::{floor_div, floor_mod, floor_to_int};

use crate::calendar::{Calendar, CalendarDate, Weekday, calendar_of_jd};
use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MINUTES_PER_DAY: f64 = 1_440.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;

const MS_PER_DAY: i64 = 86_400_000;

/// First day number `Z` of the Gregorian back-solve.
const GREGORIAN_Z: i64 = 2_299_161;

/// Julian Day Number of a calendar date.
///
/// January and February count as months 13 and 14 of the previous year.
/// The Gregorian correction `B` is applied only to Gregorian dates.
pub fn calendar_to_jd(date: &CalendarDate) -> f64 {
    let mut y = date.year() as i64;
    let mut m = date.month() as i64;
    let d = date.day_fraction();
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let b = match date.calendar() {
        Calendar::Gregorian => {
            let a = floor_div(y, 100);
            2 - a + floor_div(a, 4)
        }
        Calendar::Julian => 0,
    };
    let days = floor_to_int(365.25 * (y + 4716) as f64) + floor_to_int(30.6001 * (m + 1) as f64);
    let jd = days as f64 + d + b as f64 - 1524.5;
    tracing::trace!(y, m, b, jd, "calendar to jd");
    jd
}

/// Calendar date of a Julian Day Number.
///
/// The day fraction is rounded once to whole milliseconds and then split
/// into hour, minute, second and millisecond by truncating division, so a
/// date converted to a JDN and back reproduces every field.
pub fn jd_to_calendar(jd: f64) -> CalendarDate {
    let shifted = jd + 0.5;
    let mut z = floor_to_int(shifted);
    let f = shifted - z as f64;
    let mut ms_of_day = (f * MS_PER_DAY as f64).round() as i64;
    if ms_of_day >= MS_PER_DAY {
        z += 1;
        ms_of_day -= MS_PER_DAY;
    }

    let a = if z < GREGORIAN_Z {
        z
    } else {
        let alpha = floor_to_int((z as f64 - 1_867_216.25) / 36_524.25);
        z + 1 + alpha - floor_div(alpha, 4)
    };
    let b = a + 1524;
    let c = floor_to_int((b as f64 - 122.1) / 365.25);
    let d = floor_to_int(365.25 * c as f64);
    let e = floor_to_int((b - d) as f64 / 30.6001);

    let day = b - d - floor_to_int(30.6001 * e as f64);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    tracing::trace!(z, a, b, c, d, e, "jd to calendar");

    let hour = ms_of_day / 3_600_000;
    let minute = ms_of_day / 60_000 % 60;
    let second = ms_of_day / 1000 % 60;
    let millisecond = ms_of_day % 1000;

    CalendarDate::from_parts_unchecked(
        year as i32,
        month as u32,
        day as u32,
        hour as u32,
        minute as u32,
        second as u32,
        millisecond as u32,
    )
}

/// Day of the week at a Julian Day Number: `INT(jd + 1.5) mod 7`, Sunday = 0.
pub fn day_of_week(jd: f64) -> Weekday {
    Weekday::from_index(floor_mod(floor_to_int(jd + 1.5), 7))
}

/// An instant as a continuous count of days.
///
/// Two values are equal when their day counts are equal; calendar fields
/// are derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct JulianDay {
    jd: f64,
}

impl JulianDay {
    /// The J2000.0 epoch.
    pub const J2000: Self = Self::from_jd(J2000_JD);

    /// Wrap a raw day count.
    pub const fn from_jd(jd: f64) -> Self {
        Self { jd }
    }

    /// From calendar fields; fails for nonexistent dates or clock times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, TimeError> {
        let date = CalendarDate::new(year, month, day, hour, minute, second, millisecond)?;
        Ok(Self::from_calendar(&date))
    }

    /// Midnight at the start of a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    pub fn from_calendar(date: &CalendarDate) -> Self {
        Self::from_jd(calendar_to_jd(date))
    }

    /// The current instant from the system clock (UTC).
    pub fn now() -> Self {
        let unix_s = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        };
        Self::from_jd(UNIX_EPOCH_JD + unix_s / SECONDS_PER_DAY)
    }

    /// The raw day count.
    pub const fn jd(self) -> f64 {
        self.jd
    }

    pub fn to_calendar(self) -> CalendarDate {
        jd_to_calendar(self.jd)
    }

    /// Calendar in force at this instant.
    pub fn calendar(self) -> Calendar {
        calendar_of_jd(self.jd)
    }

    pub fn day_of_week(self) -> Weekday {
        day_of_week(self.jd)
    }

    pub fn day_of_year(self) -> u32 {
        self.to_calendar().day_of_year()
    }

    pub fn is_leap_year(self) -> bool {
        self.to_calendar().is_leap_year()
    }

    pub fn add_days(self, days: f64) -> Self {
        Self::from_jd(self.jd + days)
    }

    pub fn add_minutes(self, minutes: f64) -> Self {
        self.add_days(minutes / MINUTES_PER_DAY)
    }

    pub fn add_seconds(self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY)
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian millennia since J2000.0.
    pub fn millennia_since_j2000(self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_JULIAN_MILLENNIUM
    }
}

impl From<f64> for JulianDay {
    fn from(jd: f64) -> Self {
        Self::from_jd(jd)
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.jd
    }
}

impl From<CalendarDate> for JulianDay {
    fn from(date: CalendarDate) -> Self {
        Self::from_calendar(&date)
    }
}

impl Add<f64> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: f64) -> JulianDay {
        self.add_days(days)
    }
}

impl Sub<f64> for JulianDay {
    type Output = JulianDay;

    fn sub(self, days: f64) -> JulianDay {
        self.add_days(-days)
    }
}

/// Days elapsed between two instants.
impl Sub for JulianDay {
    type Output = f64;

    fn sub(self, other: JulianDay) -> f64 {
        self.jd - other.jd
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.5}", self.jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> CalendarDate {
        CalendarDate::new(y, mo, d, h, mi, s, 0).unwrap()
    }

    #[test]
    fn sputnik_launch() {
        let jd = calendar_to_jd(&date(1957, 10, 4, 19, 26, 24));
        assert_abs_diff_eq!(jd, 2_436_116.31, epsilon = 1e-9);
    }

    #[test]
    fn julian_calendar_date() {
        let jd = calendar_to_jd(&date(333, 1, 27, 12, 0, 0));
        assert_abs_diff_eq!(jd, 1_842_713.0, epsilon = 1e-9);
    }

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(&date(2000, 1, 1, 12, 0, 0));
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn epoch_of_the_count() {
        let jd = calendar_to_jd(&date(-4712, 1, 1, 12, 0, 0));
        assert_abs_diff_eq!(jd, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn reform_is_contiguous() {
        let last_julian = calendar_to_jd(&date(1582, 10, 4, 0, 0, 0));
        let first_gregorian = calendar_to_jd(&date(1582, 10, 15, 0, 0, 0));
        assert_abs_diff_eq!(first_gregorian - last_julian, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first_gregorian, 2_299_160.5, epsilon = 1e-9);
    }

    #[test]
    fn back_solve_julian() {
        let d = jd_to_calendar(1_842_713.0);
        assert_eq!(d, date(333, 1, 27, 12, 0, 0));
    }

    #[test]
    fn back_solve_gregorian_with_time() {
        let d = jd_to_calendar(2_436_116.31);
        assert_eq!(d, date(1957, 10, 4, 19, 26, 24));
    }

    #[test]
    fn back_solve_negative_year() {
        let d = jd_to_calendar(1_507_900.13);
        assert_eq!(d, date(-584, 5, 28, 15, 7, 12));
    }

    #[test]
    fn back_solve_before_the_epoch() {
        assert_eq!(jd_to_calendar(-100.0).to_string(), "-4713-09-23T12:00:00.000");
        for jd in [-0.25, -100.0, -1000.3, -5000.75, -100_000.5] {
            let back = calendar_to_jd(&jd_to_calendar(jd));
            assert_abs_diff_eq!(back, jd, epsilon = 1e-6);
        }
    }

    #[test]
    fn back_solve_reform_morning_is_gregorian() {
        // JD 2299160.5 is < 2299161 but is 1582-10-15 0h.
        let d = jd_to_calendar(2_299_160.5);
        assert_eq!(d, date(1582, 10, 15, 0, 0, 0));
        let d = jd_to_calendar(2_299_160.25);
        assert_eq!(d, date(1582, 10, 4, 18, 0, 0));
    }

    #[test]
    fn fraction_rounding_carries_into_next_day() {
        let d = jd_to_calendar(2_451_544.5 - 1e-10);
        assert_eq!(d, date(2000, 1, 1, 0, 0, 0));
    }

    #[test]
    fn weekday_of_known_dates() {
        // 1954-06-30 was a Wednesday.
        assert_eq!(day_of_week(2_434_923.5), Weekday::Wednesday);
        // 2000-01-01 was a Saturday.
        assert_eq!(day_of_week(2_451_544.5), Weekday::Saturday);
    }

    #[test]
    fn julian_day_equality_by_value() {
        let a = JulianDay::new(1957, 10, 4, 19, 26, 24, 0).unwrap();
        let b = JulianDay::from_jd(a.jd());
        assert_eq!(a, b);
    }

    #[test]
    fn add_zero_is_identity() {
        let jd = JulianDay::from_jd(2_451_545.25);
        assert_eq!(jd.add_days(0.0), jd);
    }

    #[test]
    fn add_days_composes() {
        let jd = JulianDay::from_jd(2_451_545.0);
        let a = jd.add_days(1.25).add_days(3.5);
        let b = jd.add_days(4.75);
        assert_abs_diff_eq!(a.jd(), b.jd(), epsilon = 1e-9);
    }

    #[test]
    fn add_minutes_and_seconds() {
        let jd = JulianDay::J2000;
        assert_abs_diff_eq!(jd.add_minutes(720.0).jd(), 2_451_545.5, epsilon = 1e-12);
        assert_abs_diff_eq!(jd.add_seconds(43_200.0).jd(), 2_451_545.5, epsilon = 1e-12);
    }

    #[test]
    fn operators() {
        let jd = JulianDay::J2000;
        assert_eq!((jd + 1.0).jd(), 2_451_546.0);
        assert_eq!((jd - 1.0).jd(), 2_451_544.0);
        assert_eq!((jd + 10.0) - jd, 10.0);
        assert!(jd < jd + 0.001);
    }

    #[test]
    fn centuries_and_millennia() {
        let jd = JulianDay::from_jd(J2000_JD + DAYS_PER_JULIAN_CENTURY);
        assert_abs_diff_eq!(jd.centuries_since_j2000(), 1.0);
        assert_abs_diff_eq!(jd.millennia_since_j2000(), 0.1);
    }

    #[test]
    fn now_is_after_2020() {
        assert!(JulianDay::now().jd() > 2_458_849.5);
    }

    #[test]
    fn display() {
        assert_eq!(JulianDay::J2000.to_string(), "JD 2451545.00000");
    }
}
