//! Sums of periodic terms `Σ A·cos(B + C·τ)` and their sine counterparts.
//!
//! Every series in the workspace goes through [`evaluate_by`], so the
//! summation order (table order) and the degree/radian conversion are the
//! same everywhere.

/// Which trigonometric function a table is defined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmonic {
    Cosine,
    Sine,
}

impl Harmonic {
    /// Apply to an angle in radians.
    pub fn apply(self, angle_rad: f64) -> f64 {
        match self {
            Self::Cosine => angle_rad.cos(),
            Self::Sine => angle_rad.sin(),
        }
    }
}

/// Unit that a table's phase and rate are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }
}

/// One `A·f(B + C·τ)` contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub rate: f64,
}

impl PeriodicTerm {
    pub const fn new(amplitude: f64, phase: f64, rate: f64) -> Self {
        Self {
            amplitude,
            phase,
            rate,
        }
    }

    /// `B + C·τ`, in the table's unit.
    pub fn argument(&self, tau: f64) -> f64 {
        self.phase + self.rate * tau
    }
}

/// Sum `A·f(B + C·τ)` over `terms` in table order.
pub fn evaluate(terms: &[PeriodicTerm], tau: f64, harmonic: Harmonic, unit: AngleUnit) -> f64 {
    evaluate_by(terms, harmonic, unit, |t| (t.amplitude, t.argument(tau)))
}

/// Sum over any term layout.
///
/// `term` maps a row to `(amplitude, argument)`, with the argument in
/// `unit`. Tables whose amplitude or argument is built from several
/// columns (nutation multipliers, lunar-phase arguments) use this form.
pub fn evaluate_by<T>(
    terms: &[T],
    harmonic: Harmonic,
    unit: AngleUnit,
    mut term: impl FnMut(&T) -> (f64, f64),
) -> f64 {
    let mut sum = 0.0;
    for row in terms {
        let (amplitude, argument) = term(row);
        sum += amplitude * harmonic.apply(unit.to_radians(argument));
    }
    sum
}

/// A named, compiled-in term table together with its defining formula.
#[derive(Debug, Clone, Copy)]
pub struct TermTable {
    pub name: &'static str,
    pub terms: &'static [PeriodicTerm],
    pub harmonic: Harmonic,
    pub unit: AngleUnit,
}

impl TermTable {
    pub const fn new(
        name: &'static str,
        terms: &'static [PeriodicTerm],
        harmonic: Harmonic,
        unit: AngleUnit,
    ) -> Self {
        Self {
            name,
            terms,
            harmonic,
            unit,
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn evaluate(&self, tau: f64) -> f64 {
        evaluate(self.terms, tau, self.harmonic, self.unit)
    }
}
