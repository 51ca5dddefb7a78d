//! Lattice methods for option pricing.
//!
//! # Overview
//!
//! * [`BinomialLattice`]: recombining Cox-Ross-Rubinstein tree holding both
//!   the underlying prices and the option values at every node
//! * [`StepPolicy`]: maps a maturity to a number of time steps
//! * [`CalendarDaySteps`]: one step per calendar day, clamped to a range

pub mod binomial_lattice;

pub use binomial_lattice::BinomialLattice;

use op_core::{Real, Size, Time};
use serde::{Deserialize, Serialize};

// ─── Step policies ────────────────────────────────────────────────────────────

/// Chooses the number of lattice steps for a given maturity.
///
/// Any `Fn(Time) -> Size` closure is a policy, which keeps alternative
/// discretizations out of the induction code.
pub trait StepPolicy: std::fmt::Debug + Send + Sync {
    /// Number of time steps for an option maturing in `maturity` years.
    fn steps(&self, maturity: Time) -> Size;
}

/// Wraps a closure so it can be used as a [`StepPolicy`].
///
/// ```
/// use op_methods::lattice::{FnSteps, StepPolicy};
/// let fixed = FnSteps(|_t: f64| 250usize);
/// assert_eq!(fixed.steps(3.0), 250);
/// ```
#[derive(Clone, Copy)]
pub struct FnSteps<F>(pub F);

impl<F> std::fmt::Debug for FnSteps<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnSteps(..)")
    }
}

impl<F> StepPolicy for FnSteps<F>
where
    F: Fn(Time) -> Size + Send + Sync,
{
    fn steps(&self, maturity: Time) -> Size {
        (self.0)(maturity)
    }
}

/// One step per calendar day of maturity, bounded below for numerical
/// stability and above for a fixed work budget.
///
/// `steps = clamp(trunc(steps_per_year · T), min_steps, max_steps)`.
/// The product is truncated toward zero, so negative or NaN maturities fall
/// to `min_steps`. When `min_steps > max_steps` the upper bound wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarDaySteps {
    /// Steps per year of maturity.
    pub steps_per_year: Real,
    /// Lower bound on the step count.
    pub min_steps: Size,
    /// Upper bound on the step count.
    pub max_steps: Size,
}

impl Default for CalendarDaySteps {
    fn default() -> Self {
        Self {
            steps_per_year: 365.0,
            min_steps: 2,
            max_steps: 100,
        }
    }
}

impl StepPolicy for CalendarDaySteps {
    fn steps(&self, maturity: Time) -> Size {
        // `as` saturates and maps NaN to zero
        let raw = (self.steps_per_year * maturity) as i64;
        raw.max(self.min_steps as i64).min(self.max_steps as i64).max(0) as Size
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
