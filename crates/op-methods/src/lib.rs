//! # op-methods
//!
//! Numerical methods for the American engine: a recombining
//! Cox-Ross-Rubinstein binomial lattice with backward induction, and the
//! step-count policy that decides how finely maturity is discretized.
//!
//! # Modules
//!
//! * [`lattice`]: binomial lattice, backward induction, step policies

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: binomial lattice and step-count policies.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{BinomialLattice, CalendarDaySteps, StepPolicy};
