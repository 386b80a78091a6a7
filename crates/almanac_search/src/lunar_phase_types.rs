//! Types for lunar phase search.

use std::fmt;

/// Principal phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

pub const ALL_MOON_PHASES: [MoonPhase; 4] = [
    MoonPhase::New,
    MoonPhase::FirstQuarter,
    MoonPhase::Full,
    MoonPhase::LastQuarter,
];

impl MoonPhase {
    /// Fractional part of the lunation number `k` for this phase.
    pub const fn lunation_fraction(self) -> f64 {
        match self {
            Self::New => 0.0,
            Self::FirstQuarter => 0.25,
            Self::Full => 0.5,
            Self::LastQuarter => 0.75,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "new moon",
            Self::FirstQuarter => "first quarter",
            Self::Full => "full moon",
            Self::LastQuarter => "last quarter",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean arguments of a lunation, degrees `[0, 360)` except `e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunationArguments {
    /// Eccentricity factor E of Earth's orbit.
    pub e: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: f64,
    /// Moon's argument of latitude F.
    pub moon_latitude: f64,
    /// Longitude of the ascending node Ω.
    pub node: f64,
}
