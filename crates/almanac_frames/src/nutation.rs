//! Nutation in longitude and obliquity, IAU 1980 theory.
//!
//! The 63 largest terms of the 106-term series, good to about 0.5″ in
//! Δψ and 0.1″ in Δε. Coefficients are in units of 0.0001″.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 22,
//! Table 22.A. Fundamental arguments from the same chapter.

use almanac_math::normalize_360;
use almanac_series::{AngleUnit, Harmonic, evaluate_by};
use almanac_time::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Mean elongation, Sun and Moon mean anomalies, Moon's argument of
/// latitude and node longitude, in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// D
    pub elongation: f64,
    /// M
    pub sun_anomaly: f64,
    /// M′
    pub moon_anomaly: f64,
    /// F
    pub moon_latitude: f64,
    /// Ω
    pub node: f64,
}

impl FundamentalArguments {
    /// `t` = Julian centuries of TD since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            elongation: normalize_360(
                297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0,
            ),
            sun_anomaly: normalize_360(
                357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0,
            ),
            moon_anomaly: normalize_360(
                134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0,
            ),
            moon_latitude: normalize_360(
                93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0,
            ),
            node: normalize_360(125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0),
        }
    }
}

/// One row of the nutation series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationTerm {
    /// Multipliers of D, M, M′, F, Ω.
    pub multipliers: [i8; 5],
    pub longitude: f64,
    pub longitude_t: f64,
    pub obliquity: f64,
    pub obliquity_t: f64,
}

impl NutationTerm {
    /// Argument of this term in degrees.
    pub fn argument(&self, args: &FundamentalArguments) -> f64 {
        let [d, m, mp, f, om] = self.multipliers;
        d as f64 * args.elongation
            + m as f64 * args.sun_anomaly
            + mp as f64 * args.moon_anomaly
            + f as f64 * args.moon_latitude
            + om as f64 * args.node
    }
}

const fn n(
    multipliers: [i8; 5],
    longitude: f64,
    longitude_t: f64,
    obliquity: f64,
    obliquity_t: f64,
) -> NutationTerm {
    NutationTerm {
        multipliers,
        longitude,
        longitude_t,
        obliquity,
        obliquity_t,
    }
}

#[rustfmt::skip]
pub static NUTATION_TERMS: [NutationTerm; 63] = [
    //  D   M  M′   F   Ω        Δψ    Δψ·T       Δε   Δε·T
    n([ 0,  0,  0,  0,  1], -171996.0, -174.2, 92025.0,   8.9),
    n([-2,  0,  0,  2,  2],  -13187.0,   -1.6,  5736.0,  -3.1),
    n([ 0,  0,  0,  2,  2],   -2274.0,   -0.2,   977.0,  -0.5),
    n([ 0,  0,  0,  0,  2],    2062.0,    0.2,  -895.0,   0.5),
    n([ 0,  1,  0,  0,  0],    1426.0,   -3.4,    54.0,  -0.1),
    n([ 0,  0,  1,  0,  0],     712.0,    0.1,    -7.0,   0.0),
    n([-2,  1,  0,  2,  2],    -517.0,    1.2,   224.0,  -0.6),
    n([ 0,  0,  0,  2,  1],    -386.0,   -0.4,   200.0,   0.0),
    n([ 0,  0,  1,  2,  2],    -301.0,    0.0,   129.0,  -0.1),
    n([-2, -1,  0,  2,  2],     217.0,   -0.5,   -95.0,   0.3),
    n([-2,  0,  1,  0,  0],    -158.0,    0.0,     0.0,   0.0),
    n([-2,  0,  0,  2,  1],     129.0,    0.1,   -70.0,   0.0),
    n([ 0,  0, -1,  2,  2],     123.0,    0.0,   -53.0,   0.0),
    n([ 2,  0,  0,  0,  0],      63.0,    0.0,     0.0,   0.0),
    n([ 0,  0,  1,  0,  1],      63.0,    0.1,   -33.0,   0.0),
    n([ 2,  0, -1,  2,  2],     -59.0,    0.0,    26.0,   0.0),
    n([ 0,  0, -1,  0,  1],     -58.0,   -0.1,    32.0,   0.0),
    n([ 0,  0,  1,  2,  1],     -51.0,    0.0,    27.0,   0.0),
    n([-2,  0,  2,  0,  0],      48.0,    0.0,     0.0,   0.0),
    n([ 0,  0, -2,  2,  1],      46.0,    0.0,   -24.0,   0.0),
    n([ 2,  0,  0,  2,  2],     -38.0,    0.0,    16.0,   0.0),
    n([ 0,  0,  2,  2,  2],     -31.0,    0.0,    13.0,   0.0),
    n([ 0,  0,  2,  0,  0],      29.0,    0.0,     0.0,   0.0),
    n([-2,  0,  1,  2,  2],      29.0,    0.0,   -12.0,   0.0),
    n([ 0,  0,  0,  2,  0],      26.0,    0.0,     0.0,   0.0),
    n([-2,  0,  0,  2,  0],     -22.0,    0.0,     0.0,   0.0),
    n([ 0,  0, -1,  2,  1],      21.0,    0.0,   -10.0,   0.0),
    n([ 0,  2,  0,  0,  0],      17.0,   -0.1,     0.0,   0.0),
    n([ 2,  0, -1,  0,  1],      16.0,    0.0,    -8.0,   0.0),
    n([-2,  2,  0,  2,  2],     -16.0,    0.1,     7.0,   0.0),
    n([ 0,  1,  0,  0,  1],     -15.0,    0.0,     9.0,   0.0),
    n([-2,  0,  1,  0,  1],     -13.0,    0.0,     7.0,   0.0),
    n([ 0, -1,  0,  0,  1],     -12.0,    0.0,     6.0,   0.0),
    n([ 0,  0,  2, -2,  0],      11.0,    0.0,     0.0,   0.0),
    n([ 2,  0, -1,  2,  1],     -10.0,    0.0,     5.0,   0.0),
    n([ 2,  0,  1,  2,  2],      -8.0,    0.0,     3.0,   0.0),
    n([ 0,  1,  0,  2,  2],       7.0,    0.0,    -3.0,   0.0),
    n([-2,  1,  1,  0,  0],      -7.0,    0.0,     0.0,   0.0),
    n([ 0, -1,  0,  2,  2],      -7.0,    0.0,     3.0,   0.0),
    n([ 2,  0,  0,  2,  1],      -7.0,    0.0,     3.0,   0.0),
    n([ 2,  0,  1,  0,  0],       6.0,    0.0,     0.0,   0.0),
    n([-2,  0,  2,  2,  2],       6.0,    0.0,    -3.0,   0.0),
    n([-2,  0,  1,  2,  1],       6.0,    0.0,    -3.0,   0.0),
    n([ 2,  0, -2,  0,  1],      -6.0,    0.0,     3.0,   0.0),
    n([ 2,  0,  0,  0,  1],      -6.0,    0.0,     3.0,   0.0),
    n([ 0, -1,  1,  0,  0],       5.0,    0.0,     0.0,   0.0),
    n([-2, -1,  0,  2,  1],      -5.0,    0.0,     3.0,   0.0),
    n([-2,  0,  0,  0,  1],      -5.0,    0.0,     3.0,   0.0),
    n([ 0,  0,  2,  2,  1],      -5.0,    0.0,     3.0,   0.0),
    n([-2,  0,  2,  0,  1],       4.0,    0.0,     0.0,   0.0),
    n([-2,  1,  0,  2,  1],       4.0,    0.0,     0.0,   0.0),
    n([ 0,  0,  1, -2,  0],       4.0,    0.0,     0.0,   0.0),
    n([-1,  0,  1,  0,  0],      -4.0,    0.0,     0.0,   0.0),
    n([-2,  1,  0,  0,  0],      -4.0,    0.0,     0.0,   0.0),
    n([ 1,  0,  0,  0,  0],      -4.0,    0.0,     0.0,   0.0),
    n([ 0,  0,  1,  2,  0],       3.0,    0.0,     0.0,   0.0),
    n([ 0,  0, -2,  2,  2],      -3.0,    0.0,     0.0,   0.0),
    n([-1, -1,  1,  0,  0],      -3.0,    0.0,     0.0,   0.0),
    n([ 0,  1,  1,  0,  0],      -3.0,    0.0,     0.0,   0.0),
    n([ 0, -1,  1,  2,  2],      -3.0,    0.0,     0.0,   0.0),
    n([ 2, -1, -1,  2,  2],      -3.0,    0.0,     0.0,   0.0),
    n([ 0,  0,  3,  2,  2],      -3.0,    0.0,     0.0,   0.0),
    n([ 2, -1,  0,  2,  2],      -3.0,    0.0,     0.0,   0.0),
];

/// Table units to arcseconds.
const UNIT_ARCSEC: f64 = 1e-4;

/// Nutation at one instant, in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ
    pub longitude_arcsec: f64,
    /// Δε
    pub obliquity_arcsec: f64,
}

fn centuries(jde: f64) -> f64 {
    (jde - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

fn longitude_sum(t: f64, args: &FundamentalArguments) -> f64 {
    evaluate_by(&NUTATION_TERMS, Harmonic::Sine, AngleUnit::Degrees, |row| {
        (row.longitude + row.longitude_t * t, row.argument(args))
    }) * UNIT_ARCSEC
}

fn obliquity_sum(t: f64, args: &FundamentalArguments) -> f64 {
    evaluate_by(&NUTATION_TERMS, Harmonic::Cosine, AngleUnit::Degrees, |row| {
        (row.obliquity + row.obliquity_t * t, row.argument(args))
    }) * UNIT_ARCSEC
}

/// Nutation in longitude Δψ, arcseconds.
pub fn nutation_in_longitude(jde: f64) -> f64 {
    let t = centuries(jde);
    longitude_sum(t, &FundamentalArguments::at(t))
}

/// Nutation in obliquity Δε, arcseconds.
pub fn nutation_in_obliquity(jde: f64) -> f64 {
    let t = centuries(jde);
    obliquity_sum(t, &FundamentalArguments::at(t))
}

/// Both components from one set of fundamental arguments.
pub fn nutation(jde: f64) -> Nutation {
    let t = centuries(jde);
    let args = FundamentalArguments::at(t);
    Nutation {
        longitude_arcsec: longitude_sum(t, &args),
        obliquity_arcsec: obliquity_sum(t, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// 1987 April 10, 0h TD.
    const JDE: f64 = 2_446_895.5;

    #[test]
    fn fundamental_arguments_1987_april_10() {
        let a = FundamentalArguments::at(centuries(JDE));
        assert_abs_diff_eq!(a.elongation, 136.9623, epsilon = 1e-4);
        assert_abs_diff_eq!(a.sun_anomaly, 94.9792, epsilon = 1e-4);
        assert_abs_diff_eq!(a.moon_anomaly, 229.2784, epsilon = 1e-4);
        assert_abs_diff_eq!(a.moon_latitude, 143.4079, epsilon = 1e-4);
        assert_abs_diff_eq!(a.node, 11.2531, epsilon = 1e-4);
    }

    #[test]
    fn longitude_and_obliquity_1987_april_10() {
        assert_abs_diff_eq!(nutation_in_longitude(JDE), -3.788, epsilon = 0.005);
        assert_abs_diff_eq!(nutation_in_obliquity(JDE), 9.443, epsilon = 0.005);
    }

    #[test]
    fn combined_matches_separate() {
        for i in 0..20 {
            let jde = 2_400_000.0 + i as f64 * 1234.5;
            let n = nutation(jde);
            assert_eq!(n.longitude_arcsec, nutation_in_longitude(jde));
            assert_eq!(n.obliquity_arcsec, nutation_in_obliquity(jde));
        }
    }

    #[test]
    fn bounded_amplitude() {
        for i in 0..200 {
            let n = nutation(2_451_545.0 + i as f64 * 97.0);
            assert!(n.longitude_arcsec.abs() < 25.0);
            assert!(n.obliquity_arcsec.abs() < 12.0);
        }
    }
}
