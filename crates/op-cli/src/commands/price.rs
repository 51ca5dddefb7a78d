//! Price one option and print the result.

use std::io::Write;

use optionpricer::prelude::*;
use tracing::{info, warn};

use crate::config::PricerConfig;
use crate::error::{CliError, Result};

/// What a pricing run reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A price was printed.
    Priced(Real),
    /// The request was rejected; the reason was printed.
    Rejected,
}

/// Price `request` under `config` and write the report to `out`.
///
/// Rejected requests are reported on `out` as well and do not produce an
/// error; only output failures do.
pub fn run(
    request: &PricingRequest,
    config: &PricerConfig,
    out: &mut impl Write,
) -> Result<Outcome> {
    let style = match request.exercise_style() {
        Ok(style) => style,
        Err(err) => {
            warn!(%err, "rejected exercise style");
            writeln!(out, "Invalid Exercise Style")?;
            return Ok(Outcome::Rejected);
        }
    };

    match price(request, config) {
        Ok((params, value)) => {
            info!(%style, option_type = %params.option_type, value, "priced");
            writeln!(out, "Exercise Style: {style}")?;
            writeln!(out, "Option Type: {}", params.option_type)?;
            writeln!(out, "Price: {value}")?;
            Ok(Outcome::Priced(value))
        }
        Err(err @ CliError::Pricing(_)) => {
            warn!(%err, "rejected request");
            writeln!(out, "{err}")?;
            Ok(Outcome::Rejected)
        }
        Err(err) => Err(err),
    }
}

fn price(request: &PricingRequest, config: &PricerConfig) -> Result<(PricingParameters, Real)> {
    let params = request.parameters()?;
    if config.strict {
        params.validate()?;
    }
    let value = request.price_with_policy(config.lattice)?;
    Ok((params, value))
}
