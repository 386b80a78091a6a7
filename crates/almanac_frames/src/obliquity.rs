//! Obliquity of the ecliptic.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), formula 22.2
//! (IAU 1976, valid within a few thousand years of J2000).

use almanac_math::ARCSEC_PER_DEGREE;
use almanac_time::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

use crate::nutation::nutation_in_obliquity;

/// ε₀ at J2000.0, 23°26′21.448″.
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / ARCSEC_PER_DEGREE;

/// Mean obliquity ε₀ in degrees.
pub fn mean_obliquity_deg(jde: f64) -> f64 {
    let t = (jde - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let arcsec = -46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    OBLIQUITY_J2000_DEG + arcsec / ARCSEC_PER_DEGREE
}

/// True obliquity ε = ε₀ + Δε, in degrees.
pub fn true_obliquity_deg(jde: f64) -> f64 {
    mean_obliquity_deg(jde) + nutation_in_obliquity(jde) / ARCSEC_PER_DEGREE
}
