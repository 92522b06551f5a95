//! Fill tracking — per-trial running totals and the shared execution report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cumulative filled quantity and cash for one in-progress replay.
///
/// Threaded by value through the snapshot fold; trial-local, reset per
/// trial. The replay is responsible for never absorbing past the order
/// target (the doubly-capped take), so `filled` never exceeds it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FillState {
    pub filled: u64,
    pub cash: f64,
}

impl FillState {
    /// Quantity still owed toward the target.
    pub fn remaining(&self, target: u64) -> u64 {
        target.saturating_sub(self.filled)
    }

    pub fn is_complete(&self, target: u64) -> bool {
        self.filled >= target
    }

    /// Absorb an execution of `qty` shares at `unit_cost` per share,
    /// returning the advanced state.
    #[must_use]
    pub fn absorb(self, qty: u64, unit_cost: f64) -> Self {
        Self {
            filled: self.filled + qty,
            cash: self.cash + qty as f64 * unit_cost,
        }
    }

    /// Average price paid per filled share.
    ///
    /// Zero fill yields `+inf` — a sentinel, never an error, so that a
    /// configuration that fills nothing loses every comparison.
    pub fn average_price(&self) -> f64 {
        if self.filled == 0 {
            f64::INFINITY
        } else {
            self.cash / self.filled as f64
        }
    }
}

/// One execution event in a fill log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillRecord {
    pub ts: DateTime<Utc>,
    pub qty: u64,
    pub price: f64,
    pub fee: f64,
    pub cost: f64,
    pub cumulative_fill: u64,
    pub cumulative_cash: f64,
}

/// The contract shared by the router replay and every baseline:
/// `(snapshots, order_size) -> ExecutionReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub total_cash: f64,
    pub avg_price: f64,
    pub filled: u64,
    pub fills: Vec<FillRecord>,
}

impl ExecutionReport {
    pub fn new(state: FillState, fills: Vec<FillRecord>) -> Self {
        Self {
            total_cash: state.cash,
            avg_price: state.average_price(),
            filled: state.filled,
            fills,
        }
    }

    /// The empty report for degenerate inputs (e.g. zero observed volume).
    pub fn empty() -> Self {
        Self::new(FillState::default(), Vec::new())
    }
}
