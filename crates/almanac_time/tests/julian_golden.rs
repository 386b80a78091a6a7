//! Golden values and round-trip properties for the Julian Day engine.
//!
//! Reference dates from Meeus, *Astronomical Algorithms*, Chapter 7.

use almanac_time::{
    Calendar, CalendarDate, JulianDay, TimeError, Weekday, calendar_of_jd, calendar_to_jd,
    jd_to_calendar,
};
use approx::assert_abs_diff_eq;

/// (year, month, day, hour, minute, second, expected JD)
const MEEUS_DATES: [(i32, u32, u32, u32, u32, u32, f64); 13] = [
    (2000, 1, 1, 12, 0, 0, 2_451_545.0),
    (1999, 1, 1, 0, 0, 0, 2_451_179.5),
    (1987, 1, 27, 0, 0, 0, 2_446_822.5),
    (1987, 6, 19, 12, 0, 0, 2_446_966.0),
    (1988, 1, 27, 0, 0, 0, 2_447_187.5),
    (1988, 6, 19, 12, 0, 0, 2_447_332.0),
    (1900, 1, 1, 0, 0, 0, 2_415_020.5),
    (1600, 1, 1, 0, 0, 0, 2_305_447.5),
    (1600, 12, 31, 0, 0, 0, 2_305_812.5),
    (837, 4, 10, 7, 12, 0, 2_026_871.8),
    (-1000, 7, 12, 12, 0, 0, 1_356_001.0),
    (-1001, 8, 17, 21, 36, 0, 1_355_671.4),
    (-4712, 1, 1, 12, 0, 0, 0.0),
];

#[test]
fn meeus_table_forward() {
    for &(y, mo, d, h, mi, s, expected) in &MEEUS_DATES {
        let date = CalendarDate::new(y, mo, d, h, mi, s, 0).unwrap();
        let jd = calendar_to_jd(&date);
        assert_abs_diff_eq!(jd, expected, epsilon = 1e-6);
    }
}

#[test]
fn meeus_table_backward() {
    for &(y, mo, d, h, mi, s, jd) in &MEEUS_DATES {
        let expected = CalendarDate::new(y, mo, d, h, mi, s, 0).unwrap();
        assert_eq!(jd_to_calendar(jd), expected, "JD {jd}");
    }
}

#[test]
fn sputnik_scenario() {
    let jd = JulianDay::new(1957, 10, 4, 19, 26, 24, 0).unwrap();
    assert_abs_diff_eq!(jd.jd(), 2_436_116.31, epsilon = 1e-9);
    assert_eq!(jd, JulianDay::from_jd(jd.jd()));
}

#[test]
fn gap_date_rejected() {
    let err = JulianDay::from_ymd(1582, 10, 10).unwrap_err();
    assert!(matches!(err, TimeError::InvalidDate { year: 1582, month: 10, day: 10, .. }));
}

#[test]
fn calendar_round_trip_to_the_millisecond() {
    let years = [-4000, -584, -1, 0, 1, 333, 1000, 1582, 1583, 1900, 2000, 2024, 2999];
    for &year in &years {
        for month in 1..=12 {
            for &(day, h, mi, s, ms) in &[
                (1, 0, 0, 0, 0),
                (13, 6, 30, 15, 250),
                (28, 23, 59, 59, 999),
                (20, 12, 0, 0, 1),
            ] {
                let Ok(date) = CalendarDate::new(year, month, day, h, mi, s, ms) else {
                    continue;
                };
                let back = jd_to_calendar(calendar_to_jd(&date));
                assert_eq!(back, date, "round trip of {date}");
            }
        }
    }
}

#[test]
fn reform_boundary_dates_round_trip() {
    for &(y, m, d) in &[(1582, 10, 4), (1582, 10, 15)] {
        let date = CalendarDate::from_ymd(y, m, d).unwrap();
        assert_eq!(jd_to_calendar(calendar_to_jd(&date)), date);
    }
    let last = CalendarDate::from_ymd(1582, 10, 4).unwrap();
    let first = CalendarDate::from_ymd(1582, 10, 15).unwrap();
    assert_eq!(last.calendar(), Calendar::Julian);
    assert_eq!(first.calendar(), Calendar::Gregorian);
    assert_eq!(last.to_julian_day().day_of_week(), Weekday::Thursday);
    assert_eq!(first.to_julian_day().day_of_week(), Weekday::Friday);
}

#[test]
fn jd_round_trip_five_decimals() {
    let mut jd: f64 = 1_000_000.123_45;
    while jd < 2_800_000.0 {
        if (jd - 2_299_161.0).abs() > 0.5 {
            let date = jd_to_calendar(jd);
            assert_abs_diff_eq!(calendar_to_jd(&date), jd, epsilon = 1e-5);
        }
        jd += 9_876.543_21;
    }
}

#[test]
fn calendar_selection_threshold() {
    let mut jd = 2_299_150.0;
    while jd < 2_299_170.0 {
        let expected = if jd < 2_299_161.0 {
            Calendar::Julian
        } else {
            Calendar::Gregorian
        };
        assert_eq!(calendar_of_jd(jd), expected, "JD {jd}");
        jd += 0.125;
    }
}

#[test]
fn day_of_year_scenario() {
    let jd = JulianDay::from_ymd(1978, 11, 14).unwrap();
    assert_eq!(jd.day_of_year(), 318);
    assert!(!jd.is_leap_year());
}
