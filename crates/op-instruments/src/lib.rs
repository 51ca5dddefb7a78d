//! # op-instruments
//!
//! Vanilla option contract terms: option type, exercise style, the payoff,
//! and the flat-market [`PricingParameters`] shared by every engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod parameters;
pub mod payoff;

pub use exercise::ExerciseStyle;
pub use parameters::PricingParameters;
pub use payoff::{OptionType, PlainVanillaPayoff};
