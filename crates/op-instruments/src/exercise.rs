//! Option exercise styles.
//!
//! The style decides which engine prices the contract: a European option
//! can only be exercised at maturity, an American one at any time up to it.

use op_core::Error;
use std::fmt;
use std::str::FromStr;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseStyle {
    /// Can be exercised at any time up to expiry.
    American,
    /// Can only be exercised at expiry.
    European,
}

impl ExerciseStyle {
    /// Lower-case label, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseStyle::American => "american",
            ExerciseStyle::European => "european",
        }
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "american" => Ok(ExerciseStyle::American),
            "european" => Ok(ExerciseStyle::European),
            _ => Err(Error::InvalidExerciseStyle(s.to_string())),
        }
    }
}
