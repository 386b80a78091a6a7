//! Periodic trigonometric series and VSOP87 planetary tables.
//!
//! This crate provides:
//! - [`PeriodicTerm`] tables summed as `Σ A·cos(B + C·τ)` or the sine form
//! - [`evaluate_by`] for tables whose rows carry their own argument layout
//! - [`TieredSeries`] for VSOP87-style precision tiers
//! - [`Vsop87Planet`] with the compiled-in [`EARTH`] series
//!
//! All tables are `static` data; nothing is built at runtime.

pub mod earth;
pub mod error;
pub mod periodic;
pub mod tiered;
pub mod vsop87;

pub use earth::EARTH;
pub use error::SeriesError;
pub use periodic::{AngleUnit, Harmonic, PeriodicTerm, TermTable, evaluate, evaluate_by};
pub use tiered::TieredSeries;
pub use vsop87::{HeliocentricPosition, Vsop87Planet, millennia_since_j2000};
