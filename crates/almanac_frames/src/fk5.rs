//! Reduction of VSOP87 ecliptic coordinates to the FK5 system.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), formula 32.3.

use almanac_math::{cos_deg, sin_deg, tan_deg};
use almanac_time::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Correction `(ΔL, ΔB)` in arcseconds for a VSOP87 longitude `l_deg` and
/// latitude `b_deg` at `jde`.
pub fn fk5_correction(l_deg: f64, b_deg: f64, jde: f64) -> (f64, f64) {
    let t = (jde - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let lp = l_deg - 1.397 * t - 0.000_31 * t * t;
    let (s, c) = (sin_deg(lp), cos_deg(lp));
    let dl = -0.090_33 + 0.039_16 * (c + s) * tan_deg(b_deg);
    let db = 0.039_16 * (c - s);
    (dl, db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sun_1992_october_13() {
        // Geometric Sun: L = 199.907372°, B = +0.000179°.
        let (dl, db) = fk5_correction(199.907_372, 0.000_179, 2_448_908.5);
        assert_abs_diff_eq!(dl, -0.090_33, epsilon = 1e-4);
        assert_abs_diff_eq!(db, -0.023_40, epsilon = 1e-3);
    }
}
