// File: crates/morph-core/src/config.rs
// Summary: Animation parameters: defaults, validation, form parsing and TOML loading.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{DEFAULT_MAX_POINTS, DEFAULT_MIN_POINTS, DEFAULT_STEPS, DEFAULT_TOTAL_TIME_MS, MAX_POINTS_LIMIT};

/// Parameters read when a new animation starts.
///
/// Contract (checked by [`AnimationConfig::validate`]):
/// `1 <= min_points <= max_points <= MAX_POINTS_LIMIT`, `steps >= 1`, `total_time_ms >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub min_points: usize,
    pub max_points: usize,
    pub steps: u32,
    pub total_time_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            min_points: DEFAULT_MIN_POINTS,
            max_points: DEFAULT_MAX_POINTS,
            steps: DEFAULT_STEPS,
            total_time_ms: DEFAULT_TOTAL_TIME_MS,
        }
    }
}

impl AnimationConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        at_least("min points", self.min_points as u64, 1)?;
        at_least("max points", self.max_points as u64, 1)?;
        at_least("steps", self.steps as u64, 1)?;
        at_least("time", self.total_time_ms, 1)?;
        at_most("max points", self.max_points as u64, MAX_POINTS_LIMIT as u64)?;
        if self.min_points > self.max_points {
            return Err(ConfigError::MinAboveMax { min: self.min_points, max: self.max_points });
        }
        Ok(self)
    }

    /// Interval between ticks: `round(total_time_ms / steps)`, never below 1 ms.
    pub fn step_time(&self) -> Duration {
        let steps = self.steps.max(1) as f64;
        let ms = (self.total_time_ms as f64 / steps).round() as u64;
        Duration::from_millis(ms.max(1))
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

fn at_most(field: &'static str, value: u64, max: u64) -> Result<(), ConfigError> {
    if value > max {
        return Err(ConfigError::AboveLimit { field, value, max });
    }
    Ok(())
}

fn at_least(field: &'static str, value: u64, min: u64) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::OutOfRange { field, value, min });
    }
    Ok(())
}

/// Raw parameter strings as typed by a user (form fields, CLI flags).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterForm {
    pub min_points: String,
    pub max_points: String,
    pub steps: String,
    pub total_time_ms: String,
}

impl ParameterForm {
    /// Parse every field as a whole number and validate the result.
    pub fn parse(&self) -> Result<AnimationConfig, ConfigError> {
        AnimationConfig {
            min_points: parse_count("min points", &self.min_points)?,
            max_points: parse_count("max points", &self.max_points)?,
            steps: u32::try_from(parse_field("steps", &self.steps)?).map_err(|_| ConfigError::NotANumber {
                field: "steps",
                value: self.steps.clone(),
            })?,
            total_time_ms: parse_field("time", &self.total_time_ms)?,
        }
        .validate()
    }
}

impl From<&AnimationConfig> for ParameterForm {
    fn from(cfg: &AnimationConfig) -> Self {
        Self {
            min_points: cfg.min_points.to_string(),
            max_points: cfg.max_points.to_string(),
            steps: cfg.steps.to_string(),
            total_time_ms: cfg.total_time_ms.to_string(),
        }
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::NotANumber { field, value: raw.to_string() })
}

fn parse_count(field: &'static str, raw: &str) -> Result<usize, ConfigError> {
    let value = parse_field(field, raw)?;
    usize::try_from(value).map_err(|_| ConfigError::AboveLimit { field, value, max: MAX_POINTS_LIMIT as u64 })
}
