//! Mean sidereal time at Greenwich.
//!
//! All functions take UT Julian Dates; the difference between UT and UT1
//! is ignored.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 12,
//! formulas 12.2 to 12.4.

use almanac_math::normalize_360;

use crate::calendar::CalendarDate;
use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_to_jd};
use crate::time_of_day::TimeOfDay;

/// Sidereal seconds elapsed per mean solar second.
pub const SIDEREAL_RATE: f64 = 1.002_737_909_35;

/// Mean sidereal time at 0h UT of the given date (formula 12.2).
///
/// `jd_midnight` must end in `.5`; the polynomial is only valid at 0h.
pub fn mean_sidereal_time_at_midnight(jd_midnight: f64) -> TimeOfDay {
    let t = (jd_midnight - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    TimeOfDay::new(6, 41, 50.548_41) + 8_640_184.812_866 * t + 0.093_104 * t * t
        - 0.000_006_2 * t * t * t
}

/// Mean sidereal time at any instant, in degrees `[0, 360)` (formula 12.4).
pub fn mean_sidereal_time_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(theta)
}

/// Mean sidereal time at any instant as a clock reading.
pub fn mean_sidereal_time(jd_ut: f64) -> TimeOfDay {
    TimeOfDay::from_degrees(mean_sidereal_time_deg(jd_ut))
}

/// Mean sidereal time for a UT calendar date: the 0h value advanced by the
/// clock time scaled to sidereal rate.
pub fn sidereal_time_at(date: &CalendarDate) -> TimeOfDay {
    let at_midnight = mean_sidereal_time_at_midnight(calendar_to_jd(&date.midnight()));
    let elapsed = TimeOfDay::from_seconds(date.hours_since_midnight() * 3600.0);
    at_midnight + elapsed * SIDEREAL_RATE
}
