//! RouteLab Runner — calibration orchestration on top of `routelab-core`.
//!
//! This crate provides:
//! - Serializable calibration configuration with fail-fast validation
//! - The randomized calibrator (rayon-parallel trials, deterministic reduction)
//! - Comparison report assembly and JSON/CSV export

pub mod calibrate;
pub mod config;
pub mod report;

pub use calibrate::{calibrate, CalibrationError, CalibrationOutcome, TrialOutcome};
pub use config::{CalibrationConfig, ConfigError, ParamBounds};
pub use report::{
    export_fills_csv, export_json, savings_bps, save_artifacts, ComparisonReport, RouterSummary,
    StrategySummary,
};
