// File: crates/morph-core/src/error.rs
// Summary: Typed errors for resampling and configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Resampling needs at least one point on each side.
    #[error("cannot resample {old} old points onto {new} new points")]
    InvalidPointCount { old: usize, new: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field}: '{value}' is not a whole number")]
    NotANumber { field: &'static str, value: String },

    #[error("{field}: {value} is below the minimum of {min}")]
    OutOfRange { field: &'static str, value: u64, min: u64 },

    #[error("{field}: {value} is above the maximum of {max}")]
    AboveLimit { field: &'static str, value: u64, max: u64 },

    #[error("min points ({min}) is greater than max points ({max})")]
    MinAboveMax { min: usize, max: usize },

    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("invalid config file")]
    Toml(#[from] toml::de::Error),
}
