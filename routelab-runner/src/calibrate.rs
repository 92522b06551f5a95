//! Randomized calibration of the penalty weights.
//!
//! Each trial draws a weight triple uniformly from the configured bounds
//! and replays the full snapshot sequence through the allocation search.
//! Trials are pure in `(params, snapshots)` and run across the rayon pool;
//! the reduction is a sequential minimum over the collected outcomes,
//! tie-broken by lowest trial index, so thread count and completion order
//! never change the winner.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use routelab_core::cost::CostParams;
use routelab_core::domain::{FillRecord, MarketSnapshot};
use routelab_core::replay::replay_router;
use routelab_core::rng::TrialSeeds;
use routelab_core::search::SearchError;

use crate::config::{CalibrationConfig, ConfigError};

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("no snapshots to replay")]
    NoSnapshots,

    #[error("snapshot {0} has no venues")]
    EmptySnapshot(usize),

    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Result of one randomized trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub trial: u32,
    pub params: CostParams,
    pub total_cash: f64,
    pub avg_price: f64,
    pub filled: u64,
}

/// The winning trial plus its full fill log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationOutcome {
    pub trial: u32,
    pub params: CostParams,
    pub total_cash: f64,
    pub avg_price: f64,
    pub filled: u64,
    pub fills: Vec<FillRecord>,
}

/// Draw a weight triple for one trial from its seeded RNG.
///
/// Sampling order is fixed (over, under, theta) so a trial's draws are a
/// pure function of its sub-seed.
fn sample_params(seeds: &TrialSeeds, trial: u32, config: &CalibrationConfig) -> CostParams {
    let mut rng = seeds.rng_for(trial);
    let (o_lo, o_hi) = config.bounds.lambda_over;
    let (u_lo, u_hi) = config.bounds.lambda_under;
    let (t_lo, t_hi) = config.bounds.theta_queue;
    let lambda_over = rng.gen_range(o_lo..=o_hi);
    let lambda_under = rng.gen_range(u_lo..=u_hi);
    let theta_queue = rng.gen_range(t_lo..=t_hi);
    CostParams::new(lambda_over, lambda_under, theta_queue)
}

fn evaluate_trial(
    trial: u32,
    seeds: &TrialSeeds,
    snapshots: &[MarketSnapshot],
    config: &CalibrationConfig,
) -> Result<TrialOutcome, SearchError> {
    let params = sample_params(seeds, trial, config);
    let report = replay_router(snapshots, config.order_size, &params, config.step)?;
    Ok(TrialOutcome {
        trial,
        params,
        total_cash: report.total_cash,
        avg_price: report.avg_price,
        filled: report.filled,
    })
}

fn validate_snapshots(snapshots: &[MarketSnapshot]) -> Result<(), CalibrationError> {
    if snapshots.is_empty() {
        return Err(CalibrationError::NoSnapshots);
    }
    for (idx, snapshot) in snapshots.iter().enumerate() {
        if snapshot.venues.is_empty() {
            return Err(CalibrationError::EmptySnapshot(idx));
        }
    }
    Ok(())
}

/// Run the full calibration: validate, evaluate trials in parallel, reduce.
///
/// A trial that fills zero shares carries the `+inf` average-price sentinel
/// and can never beat a trial with a real fill; if every trial fills zero,
/// the sentinel propagates into the outcome (trial 0 wins by index).
pub fn calibrate(
    snapshots: &[MarketSnapshot],
    config: &CalibrationConfig,
) -> Result<CalibrationOutcome, CalibrationError> {
    config.validate()?;
    validate_snapshots(snapshots)?;

    let seeds = TrialSeeds::new(config.seed);

    let outcomes: Vec<TrialOutcome> = (0..config.num_trials)
        .into_par_iter()
        .map(|trial| evaluate_trial(trial, &seeds, snapshots, config))
        .collect::<Result<Vec<_>, _>>()?;

    // Sequential reduction in trial order: strict `<` keeps the lowest
    // trial index on exact ties. num_trials > 0 was validated, so the
    // first outcome always exists.
    let mut best = &outcomes[0];
    for outcome in &outcomes[1..] {
        if outcome.avg_price < best.avg_price {
            best = outcome;
        }
    }

    // Re-run the winning replay to recover its fill log; replay is pure,
    // so this reproduces the trial exactly.
    let report = replay_router(snapshots, config.order_size, &best.params, config.step)
        .map_err(CalibrationError::Search)?;

    Ok(CalibrationOutcome {
        trial: best.trial,
        params: best.params,
        total_cash: report.total_cash,
        avg_price: report.avg_price,
        filled: report.filled,
        fills: report.fills,
    })
}
