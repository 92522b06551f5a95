//! End-to-end calibration tests: CSV tape in, comparison report out.

use routelab_core::baselines::BaselineKind;
use routelab_core::data::read_snapshots;
use routelab_core::domain::MarketSnapshot;
use routelab_runner::{calibrate, CalibrationConfig, ComparisonReport};

const HEADER: &str = "ts_event,publisher_id,ask_px_00,ask_sz_00,price\n";

fn tape() -> Vec<MarketSnapshot> {
    // Two venues over three timestamps; venue 2 is consistently cheaper.
    let body = "\
2024-08-01 13:30:00,1,10.05,300,10.0\n\
2024-08-01 13:30:00,2,10.01,300,10.0\n\
2024-08-01 13:30:01,1,10.06,300,10.0\n\
2024-08-01 13:30:01,2,10.02,300,10.0\n\
2024-08-01 13:30:02,1,10.04,300,10.0\n\
2024-08-01 13:30:02,2,10.00,300,10.0\n";
    read_snapshots(format!("{HEADER}{body}").as_bytes(), 0.002, 0.0015).unwrap()
}

fn config() -> CalibrationConfig {
    let mut config = CalibrationConfig::new(500, 25);
    config.seed = 7;
    config
}

#[test]
fn calibration_fills_and_prices_sanely() {
    let snapshots = tape();
    let outcome = calibrate(&snapshots, &config()).unwrap();

    assert!(outcome.filled > 0);
    assert!(outcome.filled <= 500);
    assert!(outcome.avg_price.is_finite());
    // Prices on the tape span 10.00..=10.06 plus the 0.002 fee.
    assert!(outcome.avg_price >= 10.0);
    assert!(outcome.avg_price <= 10.07);
    assert!(outcome.params.lambda_over >= 0.001);
    assert!(outcome.params.theta_queue <= 10.0);
}

#[test]
fn calibration_is_deterministic_across_runs() {
    let snapshots = tape();
    let a = calibrate(&snapshots, &config()).unwrap();
    let b = calibrate(&snapshots, &config()).unwrap();
    assert_eq!(a.trial, b.trial);
    assert_eq!(a.params, b.params);
    assert_eq!(a.total_cash, b.total_cash);
    assert_eq!(a.fills.len(), b.fills.len());
}

#[test]
fn different_seeds_may_pick_different_trials() {
    let snapshots = tape();
    let mut other = config();
    other.seed = 8;
    let a = calibrate(&snapshots, &config()).unwrap();
    let b = calibrate(&snapshots, &other).unwrap();
    // Different seeds draw different weights; the winning parameters differ
    // even when the realized price ties.
    assert_ne!(a.params, b.params);
}

#[test]
fn zero_liquidity_tape_returns_sentinel() {
    let body = "\
2024-08-01 13:30:00,1,10.05,0,10.0\n\
2024-08-01 13:30:01,1,10.06,0,10.0\n";
    let snapshots =
        read_snapshots(format!("{HEADER}{body}").as_bytes(), 0.002, 0.0015).unwrap();
    let mut cfg = config();
    cfg.num_trials = 1;
    let outcome = calibrate(&snapshots, &cfg).unwrap();
    assert_eq!(outcome.total_cash, 0.0);
    assert!(outcome.avg_price.is_infinite());
}

#[test]
fn report_compares_router_against_all_baselines() {
    let snapshots = tape();
    let cfg = config();
    let outcome = calibrate(&snapshots, &cfg).unwrap();

    let baseline_reports: Vec<_> = BaselineKind::ALL
        .iter()
        .map(|kind| (kind.label(), kind.run(&snapshots, cfg.order_size)))
        .collect();
    let report = ComparisonReport::assemble(cfg.run_id(), &outcome, &baseline_reports);

    assert_eq!(report.baselines.len(), 3);
    assert!(report.baselines.contains_key("best_ask"));
    assert!(report.baselines.contains_key("twap_60s"));
    assert!(report.baselines.contains_key("vwap_volume_weighted"));
    assert_eq!(report.savings_vs_baseline_bps.len(), 3);
    for (key, bps) in &report.savings_vs_baseline_bps {
        assert!(key.starts_with("vs_"));
        // Every baseline on this tape spends cash, so the ratio is defined.
        assert!(bps.is_some());
    }
}

#[test]
fn router_fill_never_exceeds_target_anywhere_in_log() {
    let snapshots = tape();
    let outcome = calibrate(&snapshots, &config()).unwrap();
    let mut prev = 0;
    for fill in &outcome.fills {
        assert!(fill.cumulative_fill >= prev);
        assert!(fill.cumulative_fill <= 500);
        prev = fill.cumulative_fill;
    }
}
