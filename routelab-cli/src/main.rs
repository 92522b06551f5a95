//! RouteLab CLI — calibrate the smart order router over an L1 quote tape.
//!
//! Commands:
//! - `run` — load a quote CSV, calibrate, run the baselines, write the
//!   comparison report and the winning fill log
//! - `inspect` — summarize a quote CSV (snapshot count, venues, time range)

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use routelab_core::baselines::BaselineKind;
use routelab_core::data::load_snapshots;
use routelab_runner::report::save_artifacts;
use routelab_runner::{calibrate, CalibrationConfig, ComparisonReport};

#[derive(Parser)]
#[command(
    name = "routelab",
    about = "RouteLab CLI — smart-order-router calibration backtest"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calibrate the router over a quote tape and compare baselines.
    Run {
        /// Path to the L1 quote CSV (ts_event, publisher_id, ask_px_00,
        /// ask_sz_00, price).
        #[arg(long)]
        data: PathBuf,

        /// Path to a TOML calibration config. Flags below override it.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Parent order size in shares.
        #[arg(long)]
        order_size: Option<u64>,

        /// Number of randomized trials.
        #[arg(long)]
        trials: Option<u32>,

        /// Master seed for trial sampling.
        #[arg(long)]
        seed: Option<u64>,

        /// Lot step for candidate allocations.
        #[arg(long)]
        step: Option<u64>,

        /// Output directory for report.json and fills.csv.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },
    /// Summarize a quote tape without running anything.
    Inspect {
        /// Path to the L1 quote CSV.
        #[arg(long)]
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            config,
            order_size,
            trials,
            seed,
            step,
            output_dir,
        } => run(data, config, order_size, trials, seed, step, output_dir),
        Commands::Inspect { data } => inspect(data),
    }
}

#[allow(clippy::too_many_arguments)]
fn run(
    data: PathBuf,
    config_path: Option<PathBuf>,
    order_size: Option<u64>,
    trials: Option<u32>,
    seed: Option<u64>,
    step: Option<u64>,
    output_dir: PathBuf,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => CalibrationConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CalibrationConfig::new(5000, 100),
    };
    if let Some(order_size) = order_size {
        config.order_size = order_size;
    }
    if let Some(trials) = trials {
        config.num_trials = trials;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(step) = step {
        config.step = step;
    }
    config.validate()?;

    let snapshots = load_snapshots(&data, config.fee, config.rebate)
        .with_context(|| format!("failed to load quote tape {}", data.display()))?;
    if snapshots.is_empty() {
        bail!("quote tape {} produced no snapshots", data.display());
    }

    eprintln!(
        "loaded {} snapshots; calibrating {} trials (seed {})...",
        snapshots.len(),
        config.num_trials,
        config.seed
    );

    let outcome = calibrate(&snapshots, &config)?;

    let baseline_reports: Vec<_> = BaselineKind::ALL
        .iter()
        .map(|kind| (kind.label(), kind.run(&snapshots, config.order_size)))
        .collect();

    let report = ComparisonReport::assemble(config.run_id(), &outcome, &baseline_reports);
    let report_path = save_artifacts(&output_dir, &report, &outcome.fills)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    eprintln!("report written to {}", report_path.display());
    Ok(())
}

fn inspect(data: PathBuf) -> Result<()> {
    // Fee/rebate don't affect the summary.
    let snapshots = load_snapshots(&data, 0.0, 0.0)
        .with_context(|| format!("failed to load quote tape {}", data.display()))?;
    if snapshots.is_empty() {
        bail!("quote tape {} produced no snapshots", data.display());
    }

    let venues: usize = snapshots.iter().map(|s| s.venues.len()).max().unwrap_or(0);
    let total_liquidity: u64 = snapshots.iter().map(|s| s.total_ask_size()).sum();
    let first = snapshots[0].timestamp();
    let last = snapshots[snapshots.len() - 1].timestamp();

    println!("snapshots:        {}", snapshots.len());
    println!("max venues:       {venues}");
    println!("total ask size:   {total_liquidity}");
    println!("time range:       {first} .. {last}");
    Ok(())
}
