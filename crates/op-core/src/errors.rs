//! Error types for optionpricer.
//!
//! Every failure the pricing library can report is a variant of the single
//! `thiserror`-derived [`Error`] enum. Numeric inputs are not checked by the
//! engines themselves, so the only errors raised while pricing are the two
//! label errors; `Precondition` is produced by opt-in validation.

use thiserror::Error;

/// The top-level error type used throughout optionpricer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An option type label that is neither call nor put.
    #[error("invalid option type: {0:?}")]
    InvalidOptionType(String),

    /// An exercise style label that is neither American nor European.
    #[error("invalid exercise style: {0:?}")]
    InvalidExerciseStyle(String),

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout optionpricer.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use op_core::{ensure, errors::Error};
/// fn positive(x: f64) -> op_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
