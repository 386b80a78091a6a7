//! Epochs of the principal lunar phases.
//!
//! `k` counts lunations from the new moon of 2000 January 6; integer `k`
//! is a new moon, `k + 0.25` a first quarter, `k + 0.5` a full moon and
//! `k + 0.75` a last quarter.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 49.
//! Accuracy is a few seconds of time for 1900–2100.

use almanac_math::{normalize_360, round_decimals};
use almanac_series::{AngleUnit, Harmonic, evaluate_by};
use almanac_time::{CalendarDate, JulianDay};
use tracing::debug;

use crate::error::SearchError;
use crate::lunar_phase_types::{LunationArguments, MoonPhase};

/// Mean lunations per year.
const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// `coefficient · E^e_power · sin(m·M + mp·M′ + f·F + om·Ω)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PhaseTerm {
    coefficient: f64,
    e_power: i32,
    multipliers: [i8; 4],
}

impl PhaseTerm {
    fn amplitude(&self, args: &LunationArguments) -> f64 {
        self.coefficient * args.e.powi(self.e_power)
    }

    fn argument(&self, args: &LunationArguments) -> f64 {
        let [m, mp, f, om] = self.multipliers;
        m as f64 * args.sun_anomaly
            + mp as f64 * args.moon_anomaly
            + f as f64 * args.moon_latitude
            + om as f64 * args.node
    }
}

const fn p(coefficient: f64, e_power: i32, multipliers: [i8; 4]) -> PhaseTerm {
    PhaseTerm {
        coefficient,
        e_power,
        multipliers,
    }
}

/// Periodic corrections for new moon.
#[rustfmt::skip]
static NEW_MOON_TERMS: [PhaseTerm; 25] = [
    //        coeff  E^n    M  M′   F   Ω
    p( -0.40720, 0, [ 0,  1,  0,  0]),
    p(  0.17241, 1, [ 1,  0,  0,  0]),
    p(  0.01608, 0, [ 0,  2,  0,  0]),
    p(  0.01039, 0, [ 0,  0,  2,  0]),
    p(  0.00739, 1, [-1,  1,  0,  0]),
    p( -0.00514, 1, [ 1,  1,  0,  0]),
    p(  0.00208, 2, [ 2,  0,  0,  0]),
    p( -0.00111, 0, [ 0,  1, -2,  0]),
    p( -0.00057, 0, [ 0,  1,  2,  0]),
    p(  0.00056, 1, [ 1,  2,  0,  0]),
    p( -0.00042, 0, [ 0,  3,  0,  0]),
    p(  0.00042, 1, [ 1,  0,  2,  0]),
    p(  0.00038, 1, [ 1,  0, -2,  0]),
    p( -0.00024, 1, [-1,  2,  0,  0]),
    p( -0.00017, 0, [ 0,  0,  0,  1]),
    p( -0.00007, 0, [ 2,  1,  0,  0]),
    p(  0.00004, 0, [ 0,  2, -2,  0]),
    p(  0.00004, 0, [ 3,  0,  0,  0]),
    p(  0.00003, 0, [ 1,  1, -2,  0]),
    p(  0.00003, 0, [ 0,  2,  2,  0]),
    p( -0.00003, 0, [ 1,  1,  2,  0]),
    p(  0.00003, 0, [-1,  1,  2,  0]),
    p( -0.00002, 0, [-1,  1, -2,  0]),
    p( -0.00002, 0, [ 1,  3,  0,  0]),
    p(  0.00002, 0, [ 0,  4,  0,  0]),
];

/// Periodic corrections for full moon.
#[rustfmt::skip]
static FULL_MOON_TERMS: [PhaseTerm; 25] = [
    //        coeff  E^n    M  M′   F   Ω
    p( -0.40614, 0, [ 0,  1,  0,  0]),
    p(  0.17302, 1, [ 1,  0,  0,  0]),
    p(  0.01614, 0, [ 0,  2,  0,  0]),
    p(  0.01043, 0, [ 0,  0,  2,  0]),
    p(  0.00734, 1, [-1,  1,  0,  0]),
    p( -0.00515, 1, [ 1,  1,  0,  0]),
    p(  0.00209, 2, [ 2,  0,  0,  0]),
    p( -0.00111, 0, [ 0,  1, -2,  0]),
    p( -0.00057, 0, [ 0,  1,  2,  0]),
    p(  0.00056, 1, [ 1,  2,  0,  0]),
    p( -0.00042, 0, [ 0,  3,  0,  0]),
    p(  0.00042, 1, [ 1,  0,  2,  0]),
    p(  0.00038, 1, [ 1,  0, -2,  0]),
    p( -0.00024, 1, [-1,  2,  0,  0]),
    p( -0.00017, 0, [ 0,  0,  0,  1]),
    p( -0.00007, 0, [ 2,  1,  0,  0]),
    p(  0.00004, 0, [ 0,  2, -2,  0]),
    p(  0.00004, 0, [ 3,  0,  0,  0]),
    p(  0.00003, 0, [ 1,  1, -2,  0]),
    p(  0.00003, 0, [ 0,  2,  2,  0]),
    p( -0.00003, 0, [ 1,  1,  2,  0]),
    p(  0.00003, 0, [-1,  1,  2,  0]),
    p( -0.00002, 0, [-1,  1, -2,  0]),
    p( -0.00002, 0, [ 1,  3,  0,  0]),
    p(  0.00002, 0, [ 0,  4,  0,  0]),
];

/// Periodic corrections for first and last quarter.
#[rustfmt::skip]
static QUARTER_TERMS: [PhaseTerm; 25] = [
    //        coeff  E^n    M  M′   F   Ω
    p( -0.62801, 0, [ 0,  1,  0,  0]),
    p(  0.17172, 1, [ 1,  0,  0,  0]),
    p( -0.01183, 1, [ 1,  1,  0,  0]),
    p(  0.00862, 0, [ 0,  2,  0,  0]),
    p(  0.00804, 0, [ 0,  0,  2,  0]),
    p(  0.00454, 1, [-1,  1,  0,  0]),
    p(  0.00204, 2, [ 2,  0,  0,  0]),
    p( -0.00180, 0, [ 0,  1, -2,  0]),
    p( -0.00070, 0, [ 0,  1,  2,  0]),
    p( -0.00040, 0, [ 0,  3,  0,  0]),
    p( -0.00034, 1, [-1,  2,  0,  0]),
    p(  0.00032, 1, [ 1,  0,  2,  0]),
    p(  0.00032, 1, [ 1,  0, -2,  0]),
    p( -0.00028, 2, [ 2,  1,  0,  0]),
    p(  0.00027, 1, [ 1,  2,  0,  0]),
    p( -0.00017, 0, [ 0,  0,  0,  1]),
    p( -0.00005, 0, [-1,  1, -2,  0]),
    p(  0.00004, 0, [ 0,  2,  2,  0]),
    p( -0.00004, 0, [ 1,  1,  2,  0]),
    p(  0.00004, 0, [-2,  1,  0,  0]),
    p(  0.00003, 0, [ 1,  1, -2,  0]),
    p(  0.00003, 0, [ 3,  0,  0,  0]),
    p(  0.00002, 0, [ 0,  2, -2,  0]),
    p(  0.00002, 0, [-1,  1,  2,  0]),
    p( -0.00002, 0, [ 1,  3,  0,  0]),
];

/// Quarter-phase W term, less its constant 0.00306. Cosine series.
#[rustfmt::skip]
static QUARTER_W_TERMS: [PhaseTerm; 5] = [
    p(-0.000_38, 1, [ 1,  0,  0,  0]),
    p( 0.000_26, 0, [ 0,  1,  0,  0]),
    p(-0.000_02, 0, [-1,  1,  0,  0]),
    p( 0.000_02, 0, [ 1,  1,  0,  0]),
    p( 0.000_02, 0, [ 0,  0,  2,  0]),
];

/// `amplitude · sin(phase + rate·k − t2·T²)`, planetary arguments A1..A14.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlanetaryTerm {
    amplitude: f64,
    phase: f64,
    rate: f64,
    t2: f64,
}

const fn a(amplitude: f64, phase: f64, rate: f64, t2: f64) -> PlanetaryTerm {
    PlanetaryTerm {
        amplitude,
        phase,
        rate,
        t2,
    }
}

/// Corrections common to all phases.
#[rustfmt::skip]
static PLANETARY_TERMS: [PlanetaryTerm; 14] = [
    a(0.000_325, 299.77,  0.107_408, 0.009_173),
    a(0.000_165, 251.88,  0.016_321, 0.0),
    a(0.000_164, 251.83, 26.651_886, 0.0),
    a(0.000_126, 349.42, 36.412_478, 0.0),
    a(0.000_110,  84.66, 18.206_239, 0.0),
    a(0.000_062, 141.74, 53.303_771, 0.0),
    a(0.000_060, 207.14,  2.453_732, 0.0),
    a(0.000_056, 154.84,  7.306_860, 0.0),
    a(0.000_047,  34.52, 27.261_239, 0.0),
    a(0.000_042, 207.19,  0.121_824, 0.0),
    a(0.000_040, 291.34,  1.844_379, 0.0),
    a(0.000_037, 161.72, 24.198_154, 0.0),
    a(0.000_035, 239.56, 25.513_099, 0.0),
    a(0.000_023, 331.55,  3.592_518, 0.0),
];

/// Lunation count at a date, unsnapped: the year fraction rounded to
/// 2 decimals, times lunations per year since 2000.
fn raw_lunation_number(year: i32, month: u32, day: u32) -> Result<f64, SearchError> {
    let date = CalendarDate::from_ymd(year, month, day)?;
    let y = round_decimals(
        year as f64 + date.day_of_year() as f64 / date.year_length() as f64,
        2,
    );
    Ok((y - 2000.0) * LUNATIONS_PER_YEAR)
}

/// Lunation number of `phase` for the lunation containing the given date.
///
/// New moon takes the nearest integer. Other phases take `floor(k) + f`
/// for either sign of `k`, so the result always has fractional part `f`
/// under floor semantics and lies within one lunation of the date.
pub fn lunation_number(
    year: i32,
    month: u32,
    day: u32,
    phase: MoonPhase,
) -> Result<f64, SearchError> {
    let k = raw_lunation_number(year, month, day)?;
    let snapped = match phase {
        MoonPhase::New => k.round(),
        _ => k.floor() + phase.lunation_fraction(),
    };
    debug!(year, month, day, %phase, k, snapped, "lunation number");
    Ok(snapped)
}

fn centuries(k: f64) -> f64 {
    k / LUNATIONS_PER_CENTURY
}

/// Mean phase JDE for lunation number `k` (formula 49.1).
pub fn mean_phase(k: f64) -> f64 {
    let t = centuries(k);
    2_451_550.097_66 + 29.530_588_861 * k + 0.000_154_37 * t.powi(2) - 0.000_000_150 * t.powi(3)
        + 0.000_000_000_73 * t.powi(4)
}

/// E, M, M′, F and Ω for lunation number `k`.
pub fn lunation_arguments(k: f64) -> LunationArguments {
    let t = centuries(k);
    let (t2, t3, t4) = (t * t, t * t * t, t * t * t * t);
    LunationArguments {
        e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        sun_anomaly: normalize_360(2.553_4 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3),
        moon_anomaly: normalize_360(
            201.564_3 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
                - 0.000_000_058 * t4,
        ),
        moon_latitude: normalize_360(
            160.718_0 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
                + 0.000_000_011 * t4,
        ),
        node: normalize_360(124.774_6 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3),
    }
}

/// Phase-specific periodic correction in days, including ±W for quarters.
pub fn phase_correction(phase: MoonPhase, args: &LunationArguments) -> f64 {
    let terms: &[PhaseTerm] = match phase {
        MoonPhase::New => &NEW_MOON_TERMS,
        MoonPhase::Full => &FULL_MOON_TERMS,
        MoonPhase::FirstQuarter | MoonPhase::LastQuarter => &QUARTER_TERMS,
    };
    let sum = evaluate_by(terms, Harmonic::Sine, AngleUnit::Degrees, |t| {
        (t.amplitude(args), t.argument(args))
    });
    let w = || {
        0.003_06
            + evaluate_by(&QUARTER_W_TERMS, Harmonic::Cosine, AngleUnit::Degrees, |t| {
                (t.amplitude(args), t.argument(args))
            })
    };
    match phase {
        MoonPhase::FirstQuarter => sum + w(),
        MoonPhase::LastQuarter => sum - w(),
        MoonPhase::New | MoonPhase::Full => sum,
    }
}

/// Correction from the planetary arguments A1..A14, in days.
pub fn planetary_correction(k: f64) -> f64 {
    let t2 = centuries(k).powi(2);
    evaluate_by(&PLANETARY_TERMS, Harmonic::Sine, AngleUnit::Degrees, |t| {
        (t.amplitude, t.phase + t.rate * k - t.t2 * t2)
    })
}

/// Corrected JDE of lunation `k`, rounded to 5 decimals.
///
/// `phase` selects the correction table and must match the fractional
/// part of `k`.
pub fn phase_epoch(k: f64, phase: MoonPhase) -> f64 {
    let mean = mean_phase(k);
    let args = lunation_arguments(k);
    let periodic = phase_correction(phase, &args);
    let planetary = planetary_correction(k);
    let jde = round_decimals(mean + periodic + planetary, 5);
    debug!(
        k,
        %phase,
        mean,
        e = args.e,
        m = args.sun_anomaly,
        mp = args.moon_anomaly,
        f = args.moon_latitude,
        om = args.node,
        periodic,
        planetary,
        jde,
        "lunar phase"
    );
    jde
}

/// The `phase` nearest the given date, as a Julian Ephemeris Day.
pub fn find_phase(
    year: i32,
    month: u32,
    day: u32,
    phase: MoonPhase,
) -> Result<JulianDay, SearchError> {
    let k = lunation_number(year, month, day, phase)?;
    Ok(JulianDay::from_jd(phase_epoch(k, phase)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar_phase_types::ALL_MOON_PHASES;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lunation_number_february_1977() {
        assert_eq!(lunation_number(1977, 2, 15, MoonPhase::New).unwrap(), -283.0);
    }

    #[test]
    fn lunation_number_fraction_matches_phase() {
        for (y, m, d) in [(1977, 2, 15), (1850, 7, 1), (2044, 1, 10), (2000, 1, 6)] {
            for phase in ALL_MOON_PHASES {
                let k = lunation_number(y, m, d, phase).unwrap();
                assert_abs_diff_eq!(k.rem_euclid(1.0), phase.lunation_fraction(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn lunation_number_negative_k_quarters_and_full() {
        assert_eq!(lunation_number(1998, 2, 4, MoonPhase::FirstQuarter).unwrap(), -23.75);
        assert_eq!(lunation_number(1977, 2, 15, MoonPhase::Full).unwrap(), -282.5);
        assert_eq!(lunation_number(1999, 12, 20, MoonPhase::Full).unwrap(), -0.5);
        assert_eq!(lunation_number(1999, 12, 1, MoonPhase::LastQuarter).unwrap(), -0.25);
    }

    #[test]
    fn lunation_number_stays_within_one_lunation() {
        // Daily from 1995 to 2004, across k = 0.
        let start = JulianDay::from_ymd(1995, 1, 1).unwrap();
        for i in 0..3650 {
            let date = start.add_days(i as f64).to_calendar();
            let (y, m, d) = (date.year(), date.month(), date.day());
            let raw = raw_lunation_number(y, m, d).unwrap();
            for phase in ALL_MOON_PHASES {
                let k = lunation_number(y, m, d, phase).unwrap();
                assert!((k - raw).abs() < 1.0, "{y}-{m}-{d} {phase}: raw {raw} snapped {k}");
                if phase != MoonPhase::New {
                    assert_eq!(k.floor(), raw.floor(), "{y}-{m}-{d} {phase}");
                }
            }
        }
    }

    #[test]
    fn lunation_number_rejects_reform_gap() {
        assert!(matches!(
            lunation_number(1582, 10, 10, MoonPhase::Full),
            Err(SearchError::Time(_))
        ));
    }

    #[test]
    fn mean_new_moon_1977() {
        assert_abs_diff_eq!(mean_phase(-283.0), 2_443_192.941_02, epsilon = 1e-5);
    }

    #[test]
    fn arguments_1977() {
        let a = lunation_arguments(-283.0);
        assert_abs_diff_eq!(a.e, 1.000_575_3, epsilon = 1e-7);
        assert_abs_diff_eq!(a.sun_anomaly, 45.7375, epsilon = 1e-3);
        assert_abs_diff_eq!(a.moon_anomaly, 95.3722, epsilon = 1e-3);
        assert_abs_diff_eq!(a.moon_latitude, 120.9584, epsilon = 1e-3);
        assert_abs_diff_eq!(a.node, 207.3176, epsilon = 1e-3);
    }

    #[test]
    fn new_moon_1977_february() {
        let jd = find_phase(1977, 2, 15, MoonPhase::New).unwrap();
        assert_abs_diff_eq!(jd.jd(), 2_443_192.651_18, epsilon = 5e-5);
    }

    #[test]
    fn last_quarter_2044_january() {
        let k = lunation_number(2044, 1, 10, MoonPhase::LastQuarter).unwrap();
        assert_eq!(k, 544.75);
        assert_abs_diff_eq!(phase_epoch(k, MoonPhase::LastQuarter), 2_467_636.491_86, epsilon = 5e-5);
    }

    #[test]
    fn phases_follow_in_order() {
        let k = 100.0;
        let jd: Vec<f64> = ALL_MOON_PHASES
            .iter()
            .map(|&p| phase_epoch(k + p.lunation_fraction(), p))
            .collect();
        for w in jd.windows(2) {
            let gap = w[1] - w[0];
            assert!((6.0..9.0).contains(&gap), "gap {gap}");
        }
    }

    #[test]
    fn results_are_rounded() {
        let jde = phase_epoch(12.5, MoonPhase::Full);
        assert_eq!(round_decimals(jde, 5), jde);
    }
}
