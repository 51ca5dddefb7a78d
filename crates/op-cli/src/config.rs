//! Configuration for the command-line tool.
//!
//! Sources, from lowest to highest priority: built-in defaults, an optional
//! TOML file, `OPTIONPRICER_*` environment variables, command-line flags.

use optionpricer::methods::CalendarDaySteps;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognised log level name.
    #[error("invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// An environment flag that is not a boolean.
    #[error("invalid boolean for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },

    /// Lattice bounds that cannot produce a step count.
    #[error("invalid lattice settings: {0}")]
    InvalidLattice(String),

    /// The file could not be read or parsed.
    #[error("configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// The level as a tracing filter directive.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Settings that shape how requests are priced and reported.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerConfig {
    /// Verbosity when `RUST_LOG` is not set.
    pub log_level: LogLevel,
    /// Validate the numeric inputs before pricing.
    pub strict: bool,
    /// Step-count policy of the American lattice.
    pub lattice: CalendarDaySteps,
}

impl PricerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PricerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `OPTIONPRICER_LOG_LEVEL` and `OPTIONPRICER_STRICT`.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(level) = var("OPTIONPRICER_LOG_LEVEL") {
            self.log_level = level.parse()?;
        }
        if let Some(strict) = var("OPTIONPRICER_STRICT") {
            self.strict = parse_flag("OPTIONPRICER_STRICT", &strict)?;
        }
        Ok(())
    }

    /// Check the lattice bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lattice = &self.lattice;
        if !(lattice.steps_per_year.is_finite() && lattice.steps_per_year > 0.0) {
            return Err(ConfigError::InvalidLattice(format!(
                "steps_per_year must be positive, got {}",
                lattice.steps_per_year
            )));
        }
        if lattice.min_steps == 0 {
            return Err(ConfigError::InvalidLattice("min_steps must be at least 1".into()));
        }
        if lattice.min_steps > lattice.max_steps {
            return Err(ConfigError::InvalidLattice(format!(
                "min_steps ({}) exceeds max_steps ({})",
                lattice.min_steps, lattice.max_steps
            )));
        }
        Ok(())
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

/// Build the configuration from all sources.
///
/// A missing file at `path` is not an error; the defaults are used instead.
pub fn load(
    path: &Path,
    strict: bool,
    log_level: Option<&str>,
) -> Result<PricerConfig, ConfigError> {
    let mut config = if path.exists() {
        PricerConfig::from_file(path)?
    } else {
        PricerConfig::default()
    };
    config.apply_env()?;
    if strict {
        config.strict = true;
    }
    if let Some(level) = log_level {
        config.log_level = level.parse()?;
    }
    Ok(config)
}
