//! The common pricing interface and the exercise-style façade.

use crate::analytic_european_engine::AnalyticEuropeanEngine;
use crate::binomial_american_engine::BinomialAmericanEngine;
use op_core::{DiscountFactor, Price, Rate, Real, Result, Time, Volatility};
use op_instruments::{ExerciseStyle, OptionType, PricingParameters};
use op_methods::StepPolicy;
use serde::{Deserialize, Serialize};

/// Uniform interface over the pricing engines.
///
/// Both engines share one immutable [`PricingParameters`]; the forward and
/// the discount factor are derived from it on demand.
pub trait OptionPricer: std::fmt::Debug + Send + Sync {
    /// The inputs this pricer was built with.
    fn parameters(&self) -> &PricingParameters;

    /// The exercise style this pricer implements.
    fn exercise_style(&self) -> ExerciseStyle;

    /// `S · exp((r − q) · T)`.
    fn forward_spot(&self) -> Real {
        self.parameters().forward_spot()
    }

    /// `exp(−r · T)`.
    fn discount_factor(&self) -> DiscountFactor {
        self.parameters().discount_factor()
    }

    /// Theoretical value of the option.
    fn price(&self) -> Result<Price>;
}

/// Build the engine for `style`: the lattice for American exercise, the
/// closed form for European exercise.
pub fn new_pricer(style: ExerciseStyle, params: PricingParameters) -> Box<dyn OptionPricer> {
    match style {
        ExerciseStyle::American => Box::new(BinomialAmericanEngine::new(params)),
        ExerciseStyle::European => Box::new(AnalyticEuropeanEngine::new(params)),
    }
}

/// Like [`new_pricer`], with a custom step policy for the lattice.
///
/// The policy is ignored for European exercise.
pub fn new_pricer_with_policy(
    style: ExerciseStyle,
    params: PricingParameters,
    policy: impl StepPolicy + 'static,
) -> Box<dyn OptionPricer> {
    match style {
        ExerciseStyle::American => Box::new(BinomialAmericanEngine::with_step_policy(params, policy)),
        ExerciseStyle::European => Box::new(AnalyticEuropeanEngine::new(params)),
    }
}

/// Build a pricer from an exercise-style label such as `"american"`.
///
/// Returns `None` when the label names no known style; the caller has to
/// check before pricing.
pub fn new_pricer_by_name(style: &str, params: PricingParameters) -> Option<Box<dyn OptionPricer>> {
    let style = style.parse::<ExerciseStyle>().ok()?;
    Some(new_pricer(style, params))
}

/// A single pricing request in label form, as it arrives from a caller that
/// does not speak the typed API (command line, configuration file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// `american` or `european`.
    pub style: String,
    /// `call` or `put`.
    pub option_type: String,
    /// Current price of the underlying.
    pub spot_price: Real,
    /// Strike price.
    pub strike: Real,
    /// Annualized volatility.
    pub volatility: Volatility,
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: Rate,
    /// Continuous dividend yield.
    pub dividend_yield: Rate,
    /// Time to maturity in years.
    pub time_to_maturity: Time,
}

impl PricingRequest {
    /// The exercise style, or `InvalidExerciseStyle`.
    pub fn exercise_style(&self) -> Result<ExerciseStyle> {
        self.style.parse()
    }

    /// Typed parameters, or `InvalidOptionType`.
    pub fn parameters(&self) -> Result<PricingParameters> {
        let option_type: OptionType = self.option_type.parse()?;
        Ok(PricingParameters::new(
            option_type,
            self.spot_price,
            self.strike,
            self.volatility,
            self.risk_free_rate,
            self.dividend_yield,
            self.time_to_maturity,
        ))
    }

    /// Price the request with the default lattice policy.
    ///
    /// The style is checked before the option type, so a request with both
    /// labels wrong reports `InvalidExerciseStyle`.
    pub fn price(&self) -> Result<Price> {
        let style = self.exercise_style()?;
        new_pricer(style, self.parameters()?).price()
    }

    /// Price the request with a custom lattice step policy.
    pub fn price_with_policy(&self, policy: impl StepPolicy + 'static) -> Result<Price> {
        let style = self.exercise_style()?;
        new_pricer_with_policy(style, self.parameters()?, policy).price()
    }
}
