//! # optionpricer
//!
//! Theoretical values of vanilla options: European exercise via the
//! Black-Scholes-Merton closed form, American exercise via a
//! Cox-Ross-Rubinstein binomial lattice.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than the individual `op-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use optionpricer::prelude::*;
//!
//! let params = PricingParameters::new(OptionType::Call, 100.0, 100.0, 0.2, 0.03, 0.01, 0.5);
//! let pricer = new_pricer(ExerciseStyle::American, params);
//! let price = pricer.price().unwrap();
//! assert_abs_diff_eq!(price, 6.076_157_546_407_386, epsilon = 1e-9);
//!
//! // Unknown style labels give no pricer at all.
//! assert!(new_pricer_by_name("bermudan", params).is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use op_core as core;

/// Normal distribution.
pub use op_math as math;

/// Option type, exercise style, pricing parameters.
pub use op_instruments as instruments;

/// Binomial lattice and step policies.
pub use op_methods as methods;

/// Pricing engines and the exercise-style façade.
pub use op_pricingengines as pricingengines;

/// The items needed to price an option.
pub mod prelude {
    pub use op_core::{Error, Real, Result};
    pub use op_instruments::{ExerciseStyle, OptionType, PricingParameters};
    pub use op_methods::{CalendarDaySteps, StepPolicy};
    pub use op_pricingengines::{
        new_pricer, new_pricer_by_name, new_pricer_with_policy, OptionPricer, PricingRequest,
    };
}
