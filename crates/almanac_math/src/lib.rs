//! Numeric helpers shared by every almanac crate.
//!
//! The classical formulas write `INT(x)` for the greatest integer not
//! exceeding `x`, and take remainders that are always non-negative for a
//! positive modulus. Rust's `/`, `%` and `as` truncate toward zero instead,
//! which silently shifts results by one for negative years and arguments.
//! Everything here uses floor semantics.
//!
//! This crate provides:
//! - Floor division and floor modulo for integers and reals
//! - `INT()` as [`floor_to_int`]
//! - Angle normalization into `[0, period)`
//! - Trigonometry on degree inputs and outputs

/// Degrees in a full revolution.
pub const DEGREES_PER_REVOLUTION: f64 = 360.0;

/// Arcseconds in one degree.
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Integer division rounded toward negative infinity.
///
/// The remainder left over by this quotient has the sign of `b`.
///
/// # Panics
/// Panics if `b == 0`, like the built-in operator.
pub const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Integer remainder with the sign of `b`: in `[0, b)` for positive `b`.
pub const fn floor_mod(a: i64, b: i64) -> i64 {
    a - b * floor_div(a, b)
}

/// Real division rounded toward negative infinity.
pub fn floor_div_f64(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

/// Real remainder with the sign of `b`: in `[0, b)` for positive `b`.
pub fn floor_mod_f64(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
        let wrapped = r + b;
        // A tiny negative remainder can round up to exactly `b`.
        if wrapped == b { 0.0 } else { wrapped }
    } else {
        r
    }
}

/// The `INT()` of the reference formulas: the greatest integer `<= x`.
///
/// `floor_to_int(-1.5) == -2`, not `-1`.
pub fn floor_to_int(x: f64) -> i64 {
    x.floor() as i64
}

/// Map `x` into `[0, period)`.
pub fn normalize_angle(x: f64, period: f64) -> f64 {
    floor_mod_f64(x, period)
}

/// Map an angle in degrees into `[0, 360)`.
pub fn normalize_360(deg: f64) -> f64 {
    normalize_angle(deg, DEGREES_PER_REVOLUTION)
}

/// Map an integer into `[0, n)`.
pub const fn normalize_int(x: i64, n: i64) -> i64 {
    floor_mod(x, n)
}

/// Round to `places` decimal places, halves away from zero.
pub fn round_decimals(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}

/// Sine of an angle in degrees.
pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle in degrees.
pub fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arcsine in degrees, in `[-90, 90]`. NaN outside `[-1, 1]`.
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees, in `[0, 180]`. NaN outside `[-1, 1]`.
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arctangent in degrees, in `[-90, 90]`.
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Four-quadrant arctangent of `y / x` in degrees, in `(-180, 180]`.
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}
