//! Calendar events against published tables.

use almanac_events::{EventError, IslamicDate, easter, pesach};
use almanac_time::{Calendar, JulianDay};

fn ymd(jd: JulianDay) -> (i32, u32, u32) {
    let d = jd.to_calendar();
    (d.year(), d.month(), d.day())
}

#[test]
fn easter_across_the_reform() {
    // 1582 uses the Julian rule, 1583 the Gregorian.
    let e1582 = easter(1582).unwrap();
    let e1583 = easter(1583).unwrap();
    assert_eq!(e1582.calendar(), Calendar::Julian);
    assert_eq!(e1583.calendar(), Calendar::Gregorian);
    assert_eq!(ymd(e1582), (1582, 4, 15));
    assert_eq!(ymd(e1583), (1583, 4, 10));
}

#[test]
fn pesach_and_easter_1990() {
    assert_eq!(ymd(pesach(1990).unwrap()), (1990, 4, 10));
    assert_eq!(ymd(easter(1990).unwrap()), (1990, 4, 15));
}

#[test]
fn pesach_before_epoch_is_an_error() {
    assert!(matches!(
        pesach(-4000),
        Err(EventError::YearOutOfRange { year: -4000, .. })
    ));
}

#[test]
fn islamic_new_years() {
    // 1 Muharram: 1421 AH = 2000-04-06, 1445 AH = 2023-07-19.
    let jd = IslamicDate::new(1421, 1, 1).unwrap().to_julian_day();
    assert_eq!(ymd(jd), (2000, 4, 6));
    let jd = IslamicDate::new(1445, 1, 1).unwrap().to_julian_day();
    assert_eq!(ymd(jd), (2023, 7, 19));
}

#[test]
fn islamic_from_gregorian() {
    let jd = JulianDay::from_ymd(1991, 8, 13).unwrap();
    let date: IslamicDate = jd.into();
    assert_eq!((date.year(), date.month(), date.day()), (1412, 2, 2));
    let back: JulianDay = date.into();
    assert_eq!(back, jd);
}
