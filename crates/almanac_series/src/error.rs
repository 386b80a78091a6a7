//! Error types for series evaluation.

use thiserror::Error;

/// Errors from evaluating a tiered series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SeriesError {
    /// The requested precision tier is not present in the table; summing
    /// what is there would return an incomplete result.
    #[error("precision tier {requested} unavailable for {series}: table has {available} tiers")]
    PrecisionUnavailable {
        series: &'static str,
        requested: usize,
        available: usize,
    },
}
