//! `optionpricer` command-line tool.
//!
//! Prices a single vanilla option and prints the exercise style, option
//! type and price.

mod commands;
mod config;
mod error;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use optionpricer::prelude::PricingRequest;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::price::Outcome;
use config::PricerConfig;

/// Vanilla option pricer: Black-Scholes for European, CRR lattice for American.
#[derive(Parser, Debug)]
#[command(name = "optionpricer")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Configuration file (skipped when absent)
    #[arg(long, default_value = "optionpricer.toml")]
    config: PathBuf,

    /// Exercise style: american or european
    #[arg(long, default_value = "american")]
    style: String,

    /// Option type: call or put
    #[arg(short = 't', long = "type", default_value = "call")]
    option_type: String,

    /// Spot price of the underlying
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    strike: f64,

    /// Annualized volatility
    #[arg(long, default_value_t = 0.2)]
    volatility: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.03)]
    rate: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.01)]
    dividend: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 0.5)]
    maturity: f64,

    /// Validate the numeric inputs before pricing
    #[arg(long)]
    strict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn request(&self) -> PricingRequest {
        PricingRequest {
            style: self.style.clone(),
            option_type: self.option_type.clone(),
            spot_price: self.spot,
            strike: self.strike,
            volatility: self.volatility,
            risk_free_rate: self.rate,
            dividend_yield: self.dividend,
            time_to_maturity: self.maturity,
        }
    }
}

fn init_tracing(config: &PricerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load(&cli.config, cli.strict, cli.log_level.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", error::CliError::from(err));
            return ExitCode::from(2);
        }
    };

    init_tracing(&config);
    debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match commands::price::run(&cli.request(), &config, &mut out).and_then(|outcome| {
        out.flush()?;
        Ok(outcome)
    }) {
        Ok(Outcome::Priced(_)) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::FAILURE,
        Err(err) => {
            error!(%err, "pricing failed");
            ExitCode::FAILURE
        }
    }
}
