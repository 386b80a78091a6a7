//! Series split into precision tiers, as in VSOP87.
//!
//! Tier `i` is a periodic sum multiplied by `τ^i`; evaluating at tier `n`
//! adds tiers `0..=n`.

use crate::error::SeriesError;
use crate::periodic::{AngleUnit, Harmonic, PeriodicTerm, evaluate};

/// One physical quantity (e.g. Earth's longitude) as tiered cosine
/// terms in radians.
#[derive(Debug, Clone, Copy)]
pub struct TieredSeries {
    pub name: &'static str,
    pub tiers: &'static [&'static [PeriodicTerm]],
    /// Multiplier applied to the summed value (table amplitude units).
    pub scale: f64,
}

impl TieredSeries {
    pub const fn new(
        name: &'static str,
        tiers: &'static [&'static [PeriodicTerm]],
        scale: f64,
    ) -> Self {
        Self { name, tiers, scale }
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Highest tier present, or `None` for an empty table.
    pub fn highest_tier(&self) -> Option<usize> {
        self.tiers.len().checked_sub(1)
    }

    /// `tier`, or the highest tier present when the table has fewer.
    pub fn clamp_tier(&self, tier: usize) -> usize {
        self.highest_tier().map_or(0, |h| h.min(tier))
    }

    /// Sum tiers `0..=tier` at `tau`.
    pub fn evaluate(&self, tau: f64, tier: usize) -> Result<f64, SeriesError> {
        if tier >= self.tiers.len() {
            return Err(SeriesError::PrecisionUnavailable {
                series: self.name,
                requested: tier,
                available: self.tiers.len(),
            });
        }
        let mut sum = 0.0;
        for (power, terms) in self.tiers[..=tier].iter().enumerate() {
            let part = evaluate(terms, tau, Harmonic::Cosine, AngleUnit::Radians);
            sum += part * tau.powi(power as i32);
        }
        Ok(sum * self.scale)
    }

    /// Sum every tier present.
    pub fn evaluate_full(&self, tau: f64) -> Result<f64, SeriesError> {
        self.evaluate(tau, self.highest_tier().unwrap_or(0))
    }
}
