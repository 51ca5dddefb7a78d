//! Binomial engine for American vanilla options (Cox-Ross-Rubinstein).
//!
//! Maturity is discretized into a number of steps chosen by a
//! [`StepPolicy`] (one per calendar day, between 2 and 100, by default).
//! Every call to [`price`](OptionPricer::price) builds a fresh lattice, rolls
//! it back with an early-exercise check at every node, and drops it.

use crate::pricer::OptionPricer;
use op_core::{Error, Price, Result, Size};
use op_instruments::{ExerciseStyle, PricingParameters};
use op_methods::{BinomialLattice, CalendarDaySteps, StepPolicy};
use tracing::debug;

/// Lattice pricing engine for American vanilla options.
#[derive(Debug)]
pub struct BinomialAmericanEngine {
    params: PricingParameters,
    step_policy: Box<dyn StepPolicy>,
}

impl BinomialAmericanEngine {
    /// Create a new engine with the default [`CalendarDaySteps`] policy.
    pub fn new(params: PricingParameters) -> Self {
        Self::with_step_policy(params, CalendarDaySteps::default())
    }

    /// Create a new engine with a custom step policy.
    pub fn with_step_policy(params: PricingParameters, policy: impl StepPolicy + 'static) -> Self {
        Self {
            params,
            step_policy: Box::new(policy),
        }
    }

    /// Number of lattice steps used for this option's maturity.
    pub fn steps(&self) -> Size {
        self.step_policy.steps(self.params.time_to_maturity)
    }

    /// Build the lattice and roll it back, keeping both trees for
    /// inspection. The root value is the option price.
    pub fn rolled_back_lattice(&self) -> BinomialLattice {
        let p = &self.params;
        let mut lattice = BinomialLattice::cox_ross_rubinstein(
            p.spot_price,
            p.volatility,
            p.risk_free_rate,
            p.dividend_yield,
            p.time_to_maturity,
            self.steps(),
        );
        let payoff = p.payoff();
        lattice.roll_back_american(&|s| payoff.value(s));
        lattice
    }
}

impl OptionPricer for BinomialAmericanEngine {
    fn parameters(&self) -> &PricingParameters {
        &self.params
    }

    fn exercise_style(&self) -> ExerciseStyle {
        ExerciseStyle::American
    }

    fn price(&self) -> Result<Price> {
        if self.steps() == 0 {
            return Err(Error::InvalidArgument(
                "step policy returned zero lattice steps".into(),
            ));
        }
        let value = self.rolled_back_lattice().value();
        debug!(option_type = %self.params.option_type, value, "american lattice price");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalyticEuropeanEngine;
    use approx::assert_abs_diff_eq;
    use op_core::{Real, Time};
    use op_instruments::OptionType;
    use op_methods::lattice::FnSteps;

    fn params(option_type: OptionType, maturity: Time) -> PricingParameters {
        PricingParameters::new(option_type, 100.0, 100.0, 0.2, 0.03, 0.01, maturity)
    }

    #[test]
    fn regression_atm_call() {
        let price = BinomialAmericanEngine::new(params(OptionType::Call, 0.5)).price().unwrap();
        assert_abs_diff_eq!(price, 6.076_157_546_407_386, epsilon = 1e-9);
    }

    #[test]
    fn regression_atm_put() {
        let price = BinomialAmericanEngine::new(params(OptionType::Put, 0.5)).price().unwrap();
        assert_abs_diff_eq!(price, 5.176_290_086_853_975, epsilon = 1e-9);
    }

    #[test]
    fn repeated_pricing_is_deterministic() {
        let engine = BinomialAmericanEngine::new(params(OptionType::Put, 0.5));
        let first = engine.price().unwrap();
        for _ in 0..3 {
            assert_eq!(engine.price().unwrap(), first);
        }
    }

    #[test]
    fn default_step_counts() {
        let steps = |t| BinomialAmericanEngine::new(params(OptionType::Call, t)).steps();
        assert_eq!(steps(0.001), 2);
        assert_eq!(steps(10.0), 100);
        assert_eq!(steps(0.5), 100);
        assert_eq!(steps(0.1), 36);
    }

    #[test]
    fn lattice_uses_policy_steps() {
        let engine = BinomialAmericanEngine::with_step_policy(
            params(OptionType::Put, 1.0),
            FnSteps(|_t: Time| 17usize),
        );
        let lattice = engine.rolled_back_lattice();
        assert_eq!(lattice.steps(), 17);
        assert_eq!(lattice.price_tree().len(), 18);
        assert_eq!(lattice.value(), engine.price().unwrap());
    }

    #[test]
    fn early_exercise_floor_at_every_node() {
        let engine = BinomialAmericanEngine::new(PricingParameters::new(
            OptionType::Put,
            100.0,
            110.0,
            0.25,
            0.05,
            0.0,
            1.0,
        ));
        let lattice = engine.rolled_back_lattice();
        let payoff = engine.parameters().payoff();
        for (values, prices) in lattice.payoff_tree().iter().zip(lattice.price_tree()) {
            for (&value, &price) in values.iter().zip(prices) {
                assert!(value >= payoff.value(price));
            }
        }
    }

    #[test]
    fn american_put_exceeds_european_put() {
        let p = PricingParameters::new(OptionType::Put, 100.0, 110.0, 0.25, 0.05, 0.0, 1.0);
        let american = BinomialAmericanEngine::new(p).price().unwrap();
        let european = AnalyticEuropeanEngine::new(p).price().unwrap();
        assert_abs_diff_eq!(american, 13.738_200_273_087_422, epsilon = 1e-9);
        assert!(american > european);
    }

    #[test]
    fn converges_to_closed_form_without_early_exercise() {
        // With q = 0 an American call is worth the European one.
        let p = PricingParameters::new(OptionType::Call, 100.0, 100.0, 0.2, 0.05, 0.0, 1.0);
        let fine = BinomialAmericanEngine::with_step_policy(p, FnSteps(|_t: Time| 1000usize));
        let exact = AnalyticEuropeanEngine::new(p).price().unwrap();
        assert_abs_diff_eq!(fine.price().unwrap(), exact, epsilon = 5e-3);
    }

    #[test]
    fn zero_step_policy_is_rejected() {
        let engine = BinomialAmericanEngine::with_step_policy(
            params(OptionType::Call, 1.0),
            FnSteps(|_t: Time| 0usize),
        );
        assert!(matches!(engine.price(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn zero_volatility_is_not_rejected() {
        let p = PricingParameters::new(OptionType::Call, 100.0, 100.0, 0.0, 0.02, 0.02, 1.0);
        let price: Real = BinomialAmericanEngine::new(p).price().unwrap();
        assert!(price.is_nan());
    }
}
