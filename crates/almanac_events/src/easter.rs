//! Date of Easter Sunday.
//!
//! Julian calendar rule through 1582, Gregorian rule from 1583.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 8.

use almanac_math::{floor_div, floor_mod};
use almanac_time::{CalendarDate, JulianDay};
use tracing::debug;

use crate::error::EventError;

/// Last year computed with the Julian rule.
pub const LAST_JULIAN_EASTER_YEAR: i32 = 1582;

/// Easter Sunday of `year` as `(month, day)`.
pub fn easter_month_day(year: i32) -> (u32, u32) {
    let y = year as i64;
    let (month, day) = if year <= LAST_JULIAN_EASTER_YEAR {
        let a = floor_mod(y, 4);
        let b = floor_mod(y, 7);
        let c = floor_mod(y, 19);
        let d = floor_mod(19 * c + 15, 30);
        let e = floor_mod(2 * a + 4 * b - d + 34, 7);
        debug!(year, a, b, c, d, e, "julian easter");
        (floor_div(d + e + 114, 31), floor_mod(d + e + 114, 31) + 1)
    } else {
        let a = floor_mod(y, 19);
        let b = floor_div(y, 100);
        let c = floor_mod(y, 100);
        let d = floor_div(b, 4);
        let e = floor_mod(b, 4);
        let f = floor_div(b + 8, 25);
        let g = floor_div(b - f + 1, 3);
        let h = floor_mod(19 * a + b - d - g + 15, 30);
        let i = floor_div(c, 4);
        let k = floor_mod(c, 4);
        let l = floor_mod(32 + 2 * e + 2 * i - h - k, 7);
        let m = floor_div(a + 11 * h + 22 * l, 451);
        debug!(year, a, b, c, h, l, m, "gregorian easter");
        let n = h + l - 7 * m + 114;
        (floor_div(n, 31), floor_mod(n, 31) + 1)
    };
    (month as u32, day as u32)
}

/// Easter Sunday of `year`, at 0h.
pub fn easter(year: i32) -> Result<JulianDay, EventError> {
    let (month, day) = easter_month_day(year);
    Ok(CalendarDate::from_ymd(year, month, day)?.to_julian_day())
}
