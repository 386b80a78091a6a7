//! Clock time wrapped into a single day.
//!
//! Used for sidereal time, where the accumulated seconds of the Meeus
//! polynomials are only meaningful modulo 86400.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use almanac_math::normalize_angle;

use crate::julian::SECONDS_PER_DAY;

/// Seconds since midnight, always in `[0, 86400)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TimeOfDay {
    seconds: f64,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { seconds: 0.0 };

    /// From a clock reading. Out-of-range fields wrap.
    pub fn new(hour: u32, minute: u32, second: f64) -> Self {
        Self::from_seconds(hour as f64 * 3600.0 + minute as f64 * 60.0 + second)
    }

    /// From any number of seconds, wrapped modulo one day.
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: normalize_angle(seconds, SECONDS_PER_DAY),
        }
    }

    /// From an hour angle in degrees (15° per hour).
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_seconds(deg * 240.0)
    }

    pub const fn total_seconds(self) -> f64 {
        self.seconds
    }

    pub fn hour(self) -> u32 {
        (self.seconds / 3600.0).floor() as u32
    }

    pub fn minute(self) -> u32 {
        ((self.seconds / 60.0).floor() as u32) % 60
    }

    /// Seconds within the minute, with fraction.
    pub fn second(self) -> f64 {
        self.seconds % 60.0
    }

    /// The same instant as an angle in degrees, `[0, 360)`.
    pub fn as_degrees(self) -> f64 {
        self.seconds / 240.0
    }

    pub fn add_seconds(self, seconds: f64) -> Self {
        Self::from_seconds(self.seconds + seconds)
    }
}

impl Add for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, other: TimeOfDay) -> TimeOfDay {
        self.add_seconds(other.seconds)
    }
}

impl Add<f64> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, seconds: f64) -> TimeOfDay {
        self.add_seconds(seconds)
    }
}

impl Sub for TimeOfDay {
    type Output = TimeOfDay;

    fn sub(self, other: TimeOfDay) -> TimeOfDay {
        self.add_seconds(-other.seconds)
    }
}

impl Sub<f64> for TimeOfDay {
    type Output = TimeOfDay;

    fn sub(self, seconds: f64) -> TimeOfDay {
        self.add_seconds(-seconds)
    }
}

/// Scale the elapsed seconds, e.g. by the sidereal/solar rate ratio.
impl Mul<f64> for TimeOfDay {
    type Output = TimeOfDay;

    fn mul(self, factor: f64) -> TimeOfDay {
        Self::from_seconds(self.seconds * factor)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}h{:02}m{:07.4}s",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn clock_fields() {
        let t = TimeOfDay::new(6, 41, 50.54841);
        assert_eq!(t.hour(), 6);
        assert_eq!(t.minute(), 41);
        assert_abs_diff_eq!(t.second(), 50.54841, epsilon = 1e-9);
    }

    #[test]
    fn wraps_forward_and_backward() {
        let t = TimeOfDay::new(23, 0, 0.0) + 7200.0;
        assert_eq!(t.hour(), 1);
        let t = TimeOfDay::MIDNIGHT - 60.0;
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
    }

    #[test]
    fn degrees() {
        let t = TimeOfDay::from_degrees(90.0);
        assert_eq!(t.hour(), 6);
        assert_abs_diff_eq!(t.as_degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn scaling() {
        let t = TimeOfDay::new(12, 0, 0.0) * 2.5;
        assert_eq!(t.hour(), 6);
    }

    #[test]
    fn display() {
        assert_eq!(TimeOfDay::new(8, 34, 57.0896).to_string(), "08h34m57.0896s");
    }
}
