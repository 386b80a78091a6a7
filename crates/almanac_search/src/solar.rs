//! Geocentric apparent longitude of the Sun from the VSOP87 Earth series.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25,
//! "higher accuracy" method.

use almanac_frames::{fk5_correction, nutation_in_longitude, solar_aberration_arcsec};
use almanac_math::{ARCSEC_PER_DEGREE, normalize_360};
use almanac_series::{EARTH, SeriesError};

/// Geometric (true) Sun: longitude and latitude in degrees, distance in AU,
/// FK5 system, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub radius_au: f64,
}

/// Geometric Sun at `jde`, with Earth's longitude series truncated at
/// `tier`. Latitude and radius use up to the same tier.
pub fn geometric_sun(jde: f64, tier: usize) -> Result<SolarPosition, SeriesError> {
    let l = EARTH.heliocentric_longitude(jde, tier)?;
    let b = EARTH.heliocentric_latitude(jde, EARTH.latitude.clamp_tier(tier))?;
    let r = EARTH.radius_vector(jde, EARTH.radius.clamp_tier(tier))?;

    let lon = normalize_360(l + 180.0);
    let lat = -b;
    let (dl, db) = fk5_correction(lon, lat, jde);
    Ok(SolarPosition {
        longitude_deg: normalize_360(lon + dl / ARCSEC_PER_DEGREE),
        latitude_deg: lat + db / ARCSEC_PER_DEGREE,
        radius_au: r,
    })
}

/// Apparent longitude of the Sun in degrees `[0, 360)`: geometric
/// longitude plus nutation in longitude and annual aberration.
pub fn apparent_solar_longitude(jde: f64, tier: usize) -> Result<f64, SeriesError> {
    let sun = geometric_sun(jde, tier)?;
    let shift = nutation_in_longitude(jde) + solar_aberration_arcsec(sun.radius_au);
    Ok(normalize_360(sun.longitude_deg + shift / ARCSEC_PER_DEGREE))
}
