//! Market and contract inputs shared by every engine.
//!
//! All rates are flat and continuously compounded over the life of the
//! option, so the forward and the discount factor reduce to single
//! exponentials.

use crate::payoff::{OptionType, PlainVanillaPayoff};
use op_core::{ensure, DiscountFactor, Rate, Real, Result, Time, Volatility};

/// The six market/contract numbers plus the option type.
///
/// Engines take this by value at construction. No bounds are enforced when
/// it is built or priced: degenerate inputs (zero volatility, zero maturity,
/// non-positive strike) propagate through the formulas as whatever IEEE-754
/// result falls out. Call [`validate`](Self::validate) to reject them up
/// front instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParameters {
    /// Call or put.
    pub option_type: OptionType,
    /// Current price of the underlying.
    pub spot_price: Real,
    /// Strike price.
    pub strike: Real,
    /// Annualized volatility of the underlying.
    pub volatility: Volatility,
    /// Continuously compounded risk-free rate up to maturity.
    pub risk_free_rate: Rate,
    /// Continuous dividend yield up to maturity.
    pub dividend_yield: Rate,
    /// Time to maturity in years.
    pub time_to_maturity: Time,
}

impl PricingParameters {
    /// Bundle the pricing inputs.
    pub fn new(
        option_type: OptionType,
        spot_price: Real,
        strike: Real,
        volatility: Volatility,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        time_to_maturity: Time,
    ) -> Self {
        Self {
            option_type,
            spot_price,
            strike,
            volatility,
            risk_free_rate,
            dividend_yield,
            time_to_maturity,
        }
    }

    /// Spot grown by the cost of carry to maturity:
    /// `S · exp((r − q) · T)`.
    pub fn forward_spot(&self) -> Real {
        self.spot_price * ((self.risk_free_rate - self.dividend_yield) * self.time_to_maturity).exp()
    }

    /// Present value of one unit paid at maturity: `exp(−r · T)`.
    pub fn discount_factor(&self) -> DiscountFactor {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }

    /// The contract's payoff at exercise.
    pub fn payoff(&self) -> PlainVanillaPayoff {
        PlainVanillaPayoff::new(self.option_type, self.strike)
    }

    /// Reject inputs for which the pricing formulas are not meaningful.
    ///
    /// Requires every number to be finite, spot, strike, volatility and
    /// maturity to be strictly positive, and the dividend yield to be
    /// non-negative. Rates may be negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spot price", self.spot_price),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("risk-free rate", self.risk_free_rate),
            ("dividend yield", self.dividend_yield),
            ("time to maturity", self.time_to_maturity),
        ];
        for (name, value) in fields {
            ensure!(value.is_finite(), "{name} must be finite, got {value}");
        }
        ensure!(self.spot_price > 0.0, "spot price must be positive, got {}", self.spot_price);
        ensure!(self.strike > 0.0, "strike must be positive, got {}", self.strike);
        ensure!(self.volatility > 0.0, "volatility must be positive, got {}", self.volatility);
        ensure!(
            self.time_to_maturity > 0.0,
            "time to maturity must be positive, got {}",
            self.time_to_maturity
        );
        ensure!(
            self.dividend_yield >= 0.0,
            "dividend yield must be non-negative, got {}",
            self.dividend_yield
        );
        Ok(())
    }
}
