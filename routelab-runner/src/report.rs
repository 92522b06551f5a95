//! Comparison report — router vs baselines, with savings in basis points.
//!
//! Export formats:
//! - **JSON**: the full report, pretty-printed, with schema versioning
//! - **CSV**: the winning trial's fill log for external analysis

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use routelab_core::domain::{ExecutionReport, FillRecord};

use crate::calibrate::CalibrationOutcome;

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// The calibrated router's section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterSummary {
    pub lambda_over: f64,
    pub lambda_under: f64,
    pub theta_queue: f64,
    pub total_cash_spent: f64,
    pub average_fill_price: f64,
    pub filled: u64,
}

/// One baseline's section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySummary {
    pub total_cash_spent: f64,
    pub average_fill_price: f64,
    pub filled: u64,
}

/// Full comparison: router, baselines, and per-baseline savings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub run_id: String,
    pub smart_order_router: RouterSummary,
    pub baselines: BTreeMap<String, StrategySummary>,
    /// `(baseline_cash - router_cash) / baseline_cash * 10000`;
    /// `None` when the baseline spent nothing (ratio undefined).
    pub savings_vs_baseline_bps: BTreeMap<String, Option<f64>>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Router saving over a baseline in basis points.
pub fn savings_bps(baseline_cash: f64, router_cash: f64) -> Option<f64> {
    if baseline_cash == 0.0 {
        None
    } else {
        Some((baseline_cash - router_cash) / baseline_cash * 10_000.0)
    }
}

impl ComparisonReport {
    pub fn assemble(
        run_id: String,
        outcome: &CalibrationOutcome,
        baseline_reports: &[(&'static str, ExecutionReport)],
    ) -> Self {
        let mut baselines = BTreeMap::new();
        let mut savings = BTreeMap::new();

        for (label, report) in baseline_reports {
            baselines.insert(
                label.to_string(),
                StrategySummary {
                    total_cash_spent: report.total_cash,
                    average_fill_price: report.avg_price,
                    filled: report.filled,
                },
            );
            savings.insert(
                format!("vs_{label}"),
                savings_bps(report.total_cash, outcome.total_cash),
            );
        }

        Self {
            schema_version: SCHEMA_VERSION,
            run_id,
            smart_order_router: RouterSummary {
                lambda_over: outcome.params.lambda_over,
                lambda_under: outcome.params.lambda_under,
                theta_queue: outcome.params.theta_queue,
                total_cash_spent: outcome.total_cash,
                average_fill_price: outcome.avg_price,
                filled: outcome.filled,
            },
            baselines,
            savings_vs_baseline_bps: savings,
        }
    }
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a report to pretty JSON.
pub fn export_json(report: &ComparisonReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize ComparisonReport to JSON")
}

/// Deserialize a report from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<ComparisonReport> {
    let report: ComparisonReport =
        serde_json::from_str(json).context("failed to deserialize ComparisonReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export a fill log as CSV.
///
/// Columns: timestamp, filled_qty, price, fee, cost, cumulative_fill,
/// cumulative_cost
pub fn export_fills_csv(fills: &[FillRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "timestamp",
        "filled_qty",
        "price",
        "fee",
        "cost",
        "cumulative_fill",
        "cumulative_cost",
    ])?;

    for fill in fills {
        wtr.write_record([
            &fill.ts.to_rfc3339(),
            &fill.qty.to_string(),
            &format!("{:.6}", fill.price),
            &format!("{:.6}", fill.fee),
            &format!("{:.6}", fill.cost),
            &fill.cumulative_fill.to_string(),
            &format!("{:.6}", fill.cumulative_cash),
        ])?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

// ─── Artifact saving ────────────────────────────────────────────────

/// Write `report.json` and `fills.csv` under `dir`, creating it if needed.
///
/// Returns the path of the written report.
pub fn save_artifacts(
    dir: &Path,
    report: &ComparisonReport,
    fills: &[FillRecord],
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output dir {}", dir.display()))?;

    let report_path = dir.join("report.json");
    fs::write(&report_path, export_json(report)?)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    let fills_path = dir.join("fills.csv");
    fs::write(&fills_path, export_fills_csv(fills)?)
        .with_context(|| format!("failed to write {}", fills_path.display()))?;

    Ok(report_path)
}
