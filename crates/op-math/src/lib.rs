//! # op-math
//!
//! Numerical building blocks for the pricing engines. At present this is
//! the standard normal distribution, wrapped so that the analytic engine can
//! take any CDF implementation as a plain function pointer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Probability distributions.
pub mod distributions;

pub use distributions::{normal_cdf, normal_cdf_hastings, normal_pdf, CumulativeNormal};
