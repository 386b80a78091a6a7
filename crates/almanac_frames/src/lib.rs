//! Nutation and the corrections that turn a geometric ecliptic position
//! into an apparent one.
//!
//! This crate provides:
//! - Nutation in longitude and obliquity (IAU 1980, 63 terms)
//! - Mean and true obliquity of the ecliptic
//! - VSOP87 to FK5 reduction
//! - Solar annual aberration

pub mod aberration;
pub mod fk5;
pub mod nutation;
pub mod obliquity;

pub use aberration::solar_aberration_arcsec;
pub use fk5::fk5_correction;
pub use nutation::{
    FundamentalArguments, NUTATION_TERMS, Nutation, NutationTerm, nutation, nutation_in_longitude,
    nutation_in_obliquity,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
