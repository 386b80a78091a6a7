//! Epoch finders: equinoxes, solstices and lunar phases.
//!
//! This crate provides:
//! - Mean, approximate and exact equinox/solstice JDE for a year
//! - Lunation numbers and corrected JDE of the four principal moon phases
//! - Geocentric apparent solar longitude from VSOP87
//!
//! Every function is a pure computation over compiled-in tables and may
//! be called from any number of threads.

pub mod equinox;
pub mod equinox_types;
pub mod error;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod solar;

pub use equinox::{
    EQUINOX_PERIODIC_TERMS, VALIDATED_YEARS, approximate_equinox, equinox_year_in_validated_range,
    exact_equinox, mean_equinox,
};
pub use equinox_types::{ALL_SEASONS, ExactEquinoxConfig, Season};
pub use error::SearchError;
pub use lunar_phase::{
    find_phase, lunation_arguments, lunation_number, mean_phase, phase_correction, phase_epoch,
    planetary_correction,
};
pub use lunar_phase_types::{ALL_MOON_PHASES, LunationArguments, MoonPhase};
pub use solar::{SolarPosition, apparent_solar_longitude, geometric_sun};
