//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Prices European vanilla options with the closed-form formula under a flat
//! risk-free rate and a continuous dividend yield, written in forward form:
//!
//! $$C = D \left( F N(d_+) - K N(d_-) \right)$$
//! $$P = C - D (F - K)$$
//!
//! where $F = S e^{(r - q)T}$, $D = e^{-rT}$ and
//! $d_\pm = \frac{\ln(F/K) \pm \sigma^2 T / 2}{\sigma\sqrt{T}}$.
//!
//! The put is obtained from put-call parity, so parity holds by construction.

use crate::pricer::OptionPricer;
use op_core::{Price, Real, Result};
use op_instruments::{ExerciseStyle, OptionType, PricingParameters};
use op_math::{normal_cdf, CumulativeNormal};
use tracing::debug;

/// Analytic pricing engine for European vanilla options.
///
/// Zero volatility or zero maturity divide by zero in `d₊`; the result is
/// whatever IEEE-754 arithmetic produces (possibly NaN).
#[derive(Debug, Clone)]
pub struct AnalyticEuropeanEngine {
    params: PricingParameters,
    cdf: CumulativeNormal,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine using the `statrs`-backed normal CDF.
    pub fn new(params: PricingParameters) -> Self {
        Self::with_cdf(params, normal_cdf)
    }

    /// Create a new engine with a specific normal CDF implementation.
    pub fn with_cdf(params: PricingParameters, cdf: CumulativeNormal) -> Self {
        Self { params, cdf }
    }

    /// `σ √T`.
    fn std_dev(&self) -> Real {
        self.params.volatility * self.params.time_to_maturity.sqrt()
    }

    /// `d₊ = (ln(F/K) + σ²T/2) / (σ√T)`.
    pub fn d_plus(&self) -> Real {
        let p = &self.params;
        ((p.forward_spot() / p.strike).ln() + 0.5 * p.volatility.powi(2) * p.time_to_maturity)
            / self.std_dev()
    }

    /// `d₋ = d₊ − σ√T`.
    pub fn d_minus(&self) -> Real {
        self.d_plus() - self.std_dev()
    }

    /// Call value `D (F N(d₊) − K N(d₋))`.
    pub fn call_price(&self) -> Price {
        let (d_plus, d_minus) = (self.d_plus(), self.d_minus());
        debug!(d_plus, d_minus, "black-scholes d terms");
        let p = &self.params;
        let (n_plus, n_minus) = ((self.cdf)(d_plus), (self.cdf)(d_minus));
        p.discount_factor() * (n_plus * p.forward_spot() - n_minus * p.strike)
    }

    /// Put value from put-call parity, `C − D (F − K)`.
    pub fn put_price(&self) -> Price {
        let p = &self.params;
        self.call_price() - p.discount_factor() * (p.forward_spot() - p.strike)
    }
}

impl OptionPricer for AnalyticEuropeanEngine {
    fn parameters(&self) -> &PricingParameters {
        &self.params
    }

    fn exercise_style(&self) -> ExerciseStyle {
        ExerciseStyle::European
    }

    fn price(&self) -> Result<Price> {
        Ok(match self.params.option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        })
    }
}
