//! Annual aberration of the Sun.

/// Shift of the Sun's apparent longitude, arcseconds, for an Earth-Sun
/// distance `radius_au`. Always negative.
///
/// Source: Meeus, *Astronomical Algorithms* (2nd ed.), formula 25.10.
pub fn solar_aberration_arcsec(radius_au: f64) -> f64 {
    -20.489_8 / radius_au
}
