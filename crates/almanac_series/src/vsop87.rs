//! Heliocentric planet positions from VSOP87 tiered series.
//!
//! The time argument is τ, Julian millennia of TDB from J2000.0.

use almanac_math::normalize_360;
use almanac_time::{DAYS_PER_JULIAN_MILLENNIUM, J2000_JD};

use crate::error::SeriesError;
use crate::tiered::TieredSeries;

/// Longitude, latitude and radius series for one planet.
#[derive(Debug, Clone, Copy)]
pub struct Vsop87Planet {
    pub name: &'static str,
    pub longitude: TieredSeries,
    pub latitude: TieredSeries,
    pub radius: TieredSeries,
}

/// Heliocentric ecliptic position, mean equinox and ecliptic of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    /// Degrees, `[0, 360)`.
    pub longitude_deg: f64,
    /// Degrees, signed.
    pub latitude_deg: f64,
    /// AU.
    pub radius_au: f64,
}

/// Julian millennia from J2000.0.
pub fn millennia_since_j2000(jde: f64) -> f64 {
    (jde - J2000_JD) / DAYS_PER_JULIAN_MILLENNIUM
}

impl Vsop87Planet {
    /// Heliocentric longitude in degrees, `[0, 360)`.
    pub fn heliocentric_longitude(&self, jde: f64, tier: usize) -> Result<f64, SeriesError> {
        let l = self.longitude.evaluate(millennia_since_j2000(jde), tier)?;
        Ok(normalize_360(l.to_degrees()))
    }

    /// Heliocentric latitude in degrees. Not wrapped.
    pub fn heliocentric_latitude(&self, jde: f64, tier: usize) -> Result<f64, SeriesError> {
        let b = self.latitude.evaluate(millennia_since_j2000(jde), tier)?;
        Ok(b.to_degrees())
    }

    /// Sun-planet distance in AU.
    pub fn radius_vector(&self, jde: f64, tier: usize) -> Result<f64, SeriesError> {
        self.radius.evaluate(millennia_since_j2000(jde), tier)
    }

    /// All three coordinates, each summed over every tier its table has.
    pub fn heliocentric_position(&self, jde: f64) -> Result<HeliocentricPosition, SeriesError> {
        let tau = millennia_since_j2000(jde);
        Ok(HeliocentricPosition {
            longitude_deg: normalize_360(self.longitude.evaluate_full(tau)?.to_degrees()),
            latitude_deg: self.latitude.evaluate_full(tau)?.to_degrees(),
            radius_au: self.radius.evaluate_full(tau)?,
        })
    }

    /// Heliocentric position with each series truncated at `tier`, or
    /// at its own highest tier when it has fewer.
    pub fn heliocentric_position_at_tier(
        &self,
        jde: f64,
        tier: usize,
    ) -> Result<HeliocentricPosition, SeriesError> {
        Ok(HeliocentricPosition {
            longitude_deg: self.heliocentric_longitude(jde, self.longitude.clamp_tier(tier))?,
            latitude_deg: self.heliocentric_latitude(jde, self.latitude.clamp_tier(tier))?,
            radius_au: self.radius_vector(jde, self.radius.clamp_tier(tier))?,
        })
    }
}
