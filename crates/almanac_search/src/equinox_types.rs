//! Types for equinox and solstice search.

use std::fmt;

use almanac_series::EARTH;

use crate::error::SearchError;

/// The four cardinal points of the Sun's apparent longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// March equinox, λ☉ = 0°.
    Spring,
    /// June solstice, λ☉ = 90°.
    Summer,
    /// September equinox, λ☉ = 180°.
    Autumn,
    /// December solstice, λ☉ = 270°.
    Winter,
}

pub const ALL_SEASONS: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

impl Season {
    /// 0 for Spring through 3 for Winter.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Apparent solar longitude that defines the event, in degrees.
    pub const fn solar_longitude_deg(self) -> f64 {
        self.index() as f64 * 90.0
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for [`exact_equinox`](crate::exact_equinox).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactEquinoxConfig {
    /// Upper bound on correction steps (default 20).
    pub max_iterations: u32,
    /// Stop once |correction| is below this, in days (default 1e-6, ~0.09 s).
    pub tolerance_days: f64,
    /// VSOP87 tier for Earth's longitude (default: all tiers).
    pub tier: usize,
}

impl Default for ExactEquinoxConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance_days: 1e-6,
            tier: EARTH.longitude.clamp_tier(usize::MAX),
        }
    }
}

impl ExactEquinoxConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig("max_iterations must be > 0"));
        }
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err(SearchError::InvalidConfig("tolerance_days must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_longitudes() {
        let lons: Vec<f64> = ALL_SEASONS.iter().map(|s| s.solar_longitude_deg()).collect();
        assert_eq!(lons, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn default_config_uses_every_longitude_tier() {
        let c = ExactEquinoxConfig::default();
        assert_eq!(c.tier, 5);
        assert_eq!(c.max_iterations, 20);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = ExactEquinoxConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            let c = ExactEquinoxConfig {
                tolerance_days: tol,
                ..Default::default()
            };
            assert!(c.validate().is_err(), "accepted {tol}");
        }
    }
}
