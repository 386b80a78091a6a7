//! First day of Pesach (Passover), 15 Nisan.
//!
//! Gauss's formula. The date is in the Julian calendar before 1583 and
//! in the Gregorian calendar from 1583.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 9.

use almanac_math::{floor_div, floor_mod, floor_to_int};
use almanac_time::{CalendarDate, JulianDay};
use tracing::debug;

use crate::error::EventError;

/// Earliest year accepted: 3761 BCE, the epoch year of the Hebrew
/// calendar.
pub const FIRST_HEBREW_YEAR: i32 = -3760;

/// Hebrew calendar (Anno Mundi) year in which Pesach of `year` falls.
pub const fn hebrew_year(year: i32) -> i32 {
    year + 3760
}

/// 15 Nisan of `year` as `(month, day)`.
pub fn pesach_month_day(year: i32) -> Result<(u32, u32), EventError> {
    if year < FIRST_HEBREW_YEAR {
        return Err(EventError::YearOutOfRange {
            year,
            min: FIRST_HEBREW_YEAR,
        });
    }
    let x = year as i64;
    let c = floor_div(x, 100);
    let s = if year < 1583 { 0 } else { floor_div(3 * c - 5, 4) };
    let a = floor_mod(12 * x + 12, 19);
    let b = floor_mod(x, 4);

    let q = -1.904_412_361_576 + 1.554_241_796_621 * a as f64 + 0.25 * b as f64
        - 0.003_177_784_022 * x as f64
        + s as f64;
    let iq = floor_to_int(q);
    let j = floor_mod(iq + 3 * x + 5 * b + 2 - s, 7);
    let r = q - iq as f64;

    let d = match j {
        2 | 4 | 6 => iq + 23,
        1 if a > 6 && r >= 0.632_870_370 => iq + 24,
        0 if a > 11 && r >= 0.897_723_765 => iq + 23,
        _ => iq + 22,
    };
    debug!(year, c, s, a, b, q, j, r, d, "pesach");
    Ok(if d > 31 { (4, (d - 31) as u32) } else { (3, d as u32) })
}

/// First day of Pesach in `year`, at 0h.
pub fn pesach(year: i32) -> Result<JulianDay, EventError> {
    let (month, day) = pesach_month_day(year)?;
    Ok(CalendarDate::from_ymd(year, month, day)?.to_julian_day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::Weekday;

    #[test]
    fn known_dates() {
        assert_eq!(pesach_month_day(1990).unwrap(), (4, 10));
        assert_eq!(pesach_month_day(2015).unwrap(), (4, 4));
        assert_eq!(pesach_month_day(2018).unwrap(), (3, 31));
    }

    #[test]
    fn hebrew_year_offset() {
        assert_eq!(hebrew_year(1990), 5750);
        assert_eq!(hebrew_year(2018), 5778);
    }

    #[test]
    fn rejects_years_before_epoch() {
        assert_eq!(
            pesach(-3761),
            Err(EventError::YearOutOfRange {
                year: -3761,
                min: -3760
            })
        );
        assert!(pesach(-3760).is_ok());
    }

    #[test]
    fn never_on_monday_wednesday_or_friday() {
        // Lo ADU Rosh: 15 Nisan cannot fall on these weekdays.
        for year in 1600..2400 {
            let wd = pesach(year).unwrap().day_of_week();
            assert!(
                !matches!(wd, Weekday::Monday | Weekday::Wednesday | Weekday::Friday),
                "{year}: {wd}"
            );
        }
    }

    #[test]
    fn falls_in_spring() {
        for year in 1900..2100 {
            let (m, d) = pesach_month_day(year).unwrap();
            assert!((m == 3 && d >= 20) || (m == 4 && d <= 30), "{year}: {m}-{d}");
        }
    }
}
