//! Equinoxes and solstices.
//!
//! Three levels of accuracy:
//! - [`mean_equinox`]: polynomial in the year (Meeus Tables 27.A/27.B)
//! - [`approximate_equinox`]: mean value plus 24 periodic terms
//!   (Table 27.C), within about a minute for 1951–2050
//! - [`exact_equinox`]: iterates on the apparent solar longitude from
//!   VSOP87 until the correction vanishes (formula 27.1)
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 27.
//! Results are JDE (Dynamical Time), rounded to 5 decimals where noted.

use almanac_math::{cos_deg, round_decimals, sin_deg};
use almanac_series::{AngleUnit, Harmonic, PeriodicTerm, TermTable};
use almanac_time::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
use tracing::{debug, warn};

use crate::equinox_types::{ExactEquinoxConfig, Season};
use crate::error::SearchError;
use crate::solar::apparent_solar_longitude;

/// Years over which the mean polynomials were fitted.
pub const VALIDATED_YEARS: std::ops::RangeInclusive<i32> = -1000..=3000;

/// Meeus Table 27.A, years −1000..+1000, `Y = year / 1000`.
#[rustfmt::skip]
const MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1_721_139.291_89, 365_242.137_40,  0.061_34,  0.001_11, -0.000_71],
    [1_721_233.254_01, 365_241.725_62, -0.053_23,  0.009_07, -0.000_25],
    [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97,  0.000_74],
    [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
];

/// Meeus Table 27.B, years +1000..+3000, `Y = (year − 2000) / 1000`.
#[rustfmt::skip]
const MEAN_FROM_1000: [[f64; 5]; 4] = [
    [2_451_623.809_84, 365_242.374_04,  0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03,  0.003_25,  0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75,  0.003_37,  0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23,  0.000_32],
];

#[rustfmt::skip]
static PERIODIC_TERMS: [PeriodicTerm; 24] = [
    PeriodicTerm::new(485.0, 324.96,   1_934.136),
    PeriodicTerm::new(203.0, 337.23,  32_964.467),
    PeriodicTerm::new(199.0, 342.08,      20.186),
    PeriodicTerm::new(182.0,  27.85, 445_267.112),
    PeriodicTerm::new(156.0,  73.14,  45_036.886),
    PeriodicTerm::new(136.0, 171.52,  22_518.443),
    PeriodicTerm::new( 77.0, 222.54,  65_928.934),
    PeriodicTerm::new( 74.0, 296.72,   3_034.906),
    PeriodicTerm::new( 70.0, 243.58,   9_037.513),
    PeriodicTerm::new( 58.0, 119.81,  33_718.147),
    PeriodicTerm::new( 52.0, 297.17,     150.678),
    PeriodicTerm::new( 50.0,  21.02,   2_281.226),
    PeriodicTerm::new( 45.0, 247.54,  29_929.562),
    PeriodicTerm::new( 44.0, 325.15,  31_555.956),
    PeriodicTerm::new( 29.0,  60.93,   4_443.417),
    PeriodicTerm::new( 18.0, 155.12,  67_555.328),
    PeriodicTerm::new( 17.0, 288.79,   4_562.452),
    PeriodicTerm::new( 16.0, 198.04,  62_894.029),
    PeriodicTerm::new( 14.0, 199.76,  31_436.921),
    PeriodicTerm::new( 12.0,  95.39,  14_577.848),
    PeriodicTerm::new( 12.0, 287.11,  31_931.756),
    PeriodicTerm::new( 12.0, 320.81,  34_777.259),
    PeriodicTerm::new(  9.0, 227.73,   1_222.114),
    PeriodicTerm::new(  8.0,  15.45,  16_859.074),
];

/// Meeus Table 27.C, `S = Σ A·cos(B + C·T)` with T in centuries.
pub static EQUINOX_PERIODIC_TERMS: TermTable = TermTable::new(
    "equinox 27.C",
    &PERIODIC_TERMS,
    Harmonic::Cosine,
    AngleUnit::Degrees,
);

/// Whether `year` lies within the range the mean polynomials were fitted
/// to. Outside it, results are extrapolations.
pub fn equinox_year_in_validated_range(year: i32) -> bool {
    VALIDATED_YEARS.contains(&year)
}

/// Mean JDE₀ of the event, rounded to 5 decimals.
///
/// Years outside −1000..=3000 log a warning and extrapolate the
/// nearest table.
pub fn mean_equinox(year: i32, season: Season) -> f64 {
    if !equinox_year_in_validated_range(year) {
        warn!(
            target: "almanac_search::equinox",
            year,
            "year outside validated range -1000..=3000; equinox accuracy not guaranteed"
        );
    }
    let (coeffs, y) = if year >= 1000 {
        (&MEAN_FROM_1000, (year as f64 - 2000.0) / 1000.0)
    } else {
        (&MEAN_BEFORE_1000, year as f64 / 1000.0)
    };
    let c = coeffs[season.index() as usize];
    let jde0 = round_decimals(
        c[0] + c[1] * y + c[2] * y.powi(2) + c[3] * y.powi(3) + c[4] * y.powi(4),
        5,
    );
    debug!(year, %season, y, jde0, "mean equinox");
    jde0
}

/// Mean JDE₀ corrected by the periodic terms of Table 27.C, rounded to
/// 5 decimals.
pub fn approximate_equinox(year: i32, season: Season) -> f64 {
    let jde0 = mean_equinox(year, season);
    let t = round_decimals((jde0 - J2000_JD) / DAYS_PER_JULIAN_CENTURY, 9);
    let w = 35_999.373 * t - 2.47;
    let dlambda = 1.0 + 0.033_4 * cos_deg(w) + 0.000_7 * cos_deg(2.0 * w);
    let s = EQUINOX_PERIODIC_TERMS.evaluate(t).floor();
    let jde = round_decimals(jde0 + (0.000_01 * s) / dlambda, 5);
    debug!(year, %season, t, w, dlambda, s, jde, "approximate equinox");
    jde
}

/// Exact JDE of the event, iterating
/// `JDE ← JDE + 58·sin(season·90° − λ☉)` from the mean epoch.
///
/// Not rounded. Fails with [`SearchError::NoConvergence`] if the
/// correction is still above `config.tolerance_days` after
/// `config.max_iterations` steps.
pub fn exact_equinox(
    year: i32,
    season: Season,
    config: &ExactEquinoxConfig,
) -> Result<f64, SearchError> {
    config.validate()?;
    let target = season.solar_longitude_deg();
    let mut jde = mean_equinox(year, season);
    let mut correction = f64::INFINITY;
    for iteration in 1..=config.max_iterations {
        let lambda = apparent_solar_longitude(jde, config.tier)?;
        correction = 58.0 * sin_deg(target - lambda);
        jde += correction;
        debug!(year, %season, iteration, lambda, correction, jde, "exact equinox step");
        if correction.abs() < config.tolerance_days {
            return Ok(jde);
        }
    }
    Err(SearchError::NoConvergence {
        iterations: config.max_iterations,
        last_correction_days: correction,
    })
}
