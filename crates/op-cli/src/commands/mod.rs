//! Subcommand implementations.

pub mod price;
