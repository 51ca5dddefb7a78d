//! # op-pricingengines
//!
//! Pricing engines for vanilla options and the façade that picks one by
//! exercise style.
//!
//! ## Engines
//!
//! - [`AnalyticEuropeanEngine`]: Black-Scholes-Merton closed form with a
//!   continuous dividend yield
//! - [`BinomialAmericanEngine`]: Cox-Ross-Rubinstein lattice with early
//!   exercise at every node
//!
//! ## Façade
//!
//! - [`new_pricer`] / [`new_pricer_with_policy`]: typed construction
//! - [`new_pricer_by_name`]: construction from a style label, absent when
//!   the label is unknown
//! - [`PricingRequest`]: one-shot pricing from labels and six numbers

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod binomial_american_engine;
pub mod pricer;

pub use analytic_european_engine::AnalyticEuropeanEngine;
pub use binomial_american_engine::BinomialAmericanEngine;
pub use pricer::{new_pricer, new_pricer_by_name, new_pricer_with_policy, OptionPricer, PricingRequest};
