//! Probability distributions.
//!
//! Only the standard normal is needed, delegating to the `statrs` crate for
//! the complementary error function.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_hastings, normal_pdf, CumulativeNormal};
