//! Error type for the epoch finders.

use almanac_series::SeriesError;
use almanac_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Series(#[from] SeriesError),
    /// The correction was still above tolerance after the iteration limit.
    #[error("no convergence after {iterations} iterations (last correction {last_correction_days} d)")]
    NoConvergence {
        iterations: u32,
        last_correction_days: f64,
    },
    #[error("invalid search configuration: {0}")]
    InvalidConfig(&'static str),
}
