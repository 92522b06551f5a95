//! Serializable calibration configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Unique identifier for a calibration run (content-addressable hash).
pub type RunId = String;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("order_size must be positive")]
    ZeroOrderSize,

    #[error("num_trials must be positive")]
    ZeroTrials,

    #[error("step must be positive")]
    ZeroStep,

    #[error("invalid bounds for {name}: ({low}, {high})")]
    InvalidBounds { name: &'static str, low: f64, high: f64 },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// `[low, high]` sampling ranges for the three penalty weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParamBounds {
    pub lambda_over: (f64, f64),
    pub lambda_under: (f64, f64),
    pub theta_queue: (f64, f64),
}

impl Default for ParamBounds {
    fn default() -> Self {
        Self {
            lambda_over: (0.001, 10.0),
            lambda_under: (0.001, 10.0),
            theta_queue: (0.001, 10.0),
        }
    }
}

impl ParamBounds {
    fn check(name: &'static str, (low, high): (f64, f64)) -> Result<(), ConfigError> {
        let valid = low.is_finite() && high.is_finite() && low >= 0.0 && low <= high;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds { name, low, high })
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check("lambda_over", self.lambda_over)?;
        Self::check("lambda_under", self.lambda_under)?;
        Self::check("theta_queue", self.theta_queue)?;
        Ok(())
    }
}

/// Configuration for a single calibration run.
///
/// Captures everything needed to reproduce the run: target size, trial
/// count, lot step, master seed, sampling bounds, and the fee/rebate
/// applied uniformly at ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalibrationConfig {
    /// Parent order size in shares.
    pub order_size: u64,

    /// Number of independent randomized trials.
    pub num_trials: u32,

    /// Lot step for candidate allocations.
    #[serde(default = "default_step")]
    pub step: u64,

    /// Master seed for deterministic trial sampling.
    #[serde(default)]
    pub seed: u64,

    /// Taker fee per share, applied to every venue at ingestion.
    #[serde(default = "default_fee")]
    pub fee: f64,

    /// Rebate per resting share, applied to every venue at ingestion.
    #[serde(default = "default_rebate")]
    pub rebate: f64,

    /// Sampling ranges for the penalty weights.
    ///
    /// Last field so TOML serialization emits plain values before the
    /// bounds table.
    #[serde(default)]
    pub bounds: ParamBounds,
}

fn default_step() -> u64 {
    100
}

fn default_fee() -> f64 {
    0.002
}

fn default_rebate() -> f64 {
    0.0015
}

impl CalibrationConfig {
    pub fn new(order_size: u64, num_trials: u32) -> Self {
        Self {
            order_size,
            num_trials,
            step: default_step(),
            seed: 0,
            fee: default_fee(),
            rebate: default_rebate(),
            bounds: ParamBounds::default(),
        }
    }

    /// Fail-fast precondition check, run before any trial.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_size == 0 {
            return Err(ConfigError::ZeroOrderSize);
        }
        if self.num_trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        self.bounds.validate()
    }

    /// Deterministic content hash of this configuration.
    ///
    /// Two runs with identical configs share a RunId, so artifacts from
    /// repeated runs can be matched up.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("CalibrationConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
