//! Option type and the plain vanilla payoff.

use op_core::{Error, Real};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Immediate exercise value at `price`: `max(0, S − K)` for a call,
    /// `max(0, K − S)` for a put. A NaN price or strike gives NaN.
    #[inline]
    pub fn intrinsic(self, price: Real, strike: Real) -> Real {
        let exercise = self.sign() * (price - strike);
        if exercise.is_nan() {
            exercise
        } else {
            exercise.max(0.0)
        }
    }

    /// Lower-case label, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = Error;

    /// Parses `call` / `put`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(Error::InvalidOptionType(s.to_string())),
        }
    }
}

/// Standard "plain vanilla" payoff: `max(φ(S − K), 0)` where `φ = +1` for
/// Call, `−1` for Put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// Payoff given the underlying price at exercise.
    pub fn value(&self, price: Real) -> Real {
        self.option_type.intrinsic(price, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn call_and_put_intrinsic() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let put = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        assert_abs_diff_eq!(call.value(120.0), 20.0);
        assert_abs_diff_eq!(call.value(80.0), 0.0);
        assert_abs_diff_eq!(put.value(80.0), 20.0);
        assert_abs_diff_eq!(put.value(120.0), 0.0);
        assert_abs_diff_eq!(call.value(100.0), 0.0);
    }

    #[test]
    fn nan_inputs_are_not_floored() {
        for ty in [OptionType::Call, OptionType::Put] {
            assert!(ty.intrinsic(Real::NAN, 100.0).is_nan());
            assert!(ty.intrinsic(100.0, Real::NAN).is_nan());
        }
        assert!(PlainVanillaPayoff::new(OptionType::Put, Real::NAN).value(80.0).is_nan());
    }

    #[test]
    fn sign_matches_payoff_direction() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
    }

    #[test]
    fn parse_labels() {
        assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!("PUT".parse::<OptionType>(), Ok(OptionType::Put));
        assert_eq!(" Call ".parse::<OptionType>(), Ok(OptionType::Call));
    }

    #[test]
    fn unknown_label_is_invalid_option_type() {
        assert_eq!(
            "straddle".parse::<OptionType>(),
            Err(Error::InvalidOptionType("straddle".into()))
        );
        assert!(matches!(
            "".parse::<OptionType>(),
            Err(Error::InvalidOptionType(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for ty in [OptionType::Call, OptionType::Put] {
            assert_eq!(ty.to_string().parse::<OptionType>(), Ok(ty));
        }
    }
}
