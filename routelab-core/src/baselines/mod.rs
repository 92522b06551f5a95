//! Baseline execution strategies used for comparison against the router.
//!
//! All three share the router's contract:
//! `(snapshots, order_size) -> ExecutionReport`.

mod best_ask;
mod twap;
mod vwap;

pub use best_ask::best_ask;
pub use twap::twap_60s;
pub use vwap::vwap_volume_weighted;

use chrono::{DateTime, Utc};

use crate::domain::{ExecutionReport, MarketSnapshot};

/// Width of the TWAP/VWAP time buckets in seconds.
pub const BUCKET_SECS: i64 = 60;

/// Which baseline to run; labels match the report keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineKind {
    BestAsk,
    Twap,
    Vwap,
}

impl BaselineKind {
    pub const ALL: [BaselineKind; 3] = [Self::BestAsk, Self::Twap, Self::Vwap];

    pub fn label(&self) -> &'static str {
        match self {
            Self::BestAsk => "best_ask",
            Self::Twap => "twap_60s",
            Self::Vwap => "vwap_volume_weighted",
        }
    }

    pub fn run(&self, snapshots: &[MarketSnapshot], order_size: u64) -> ExecutionReport {
        match self {
            Self::BestAsk => best_ask(snapshots, order_size),
            Self::Twap => twap_60s(snapshots, order_size),
            Self::Vwap => vwap_volume_weighted(snapshots, order_size),
        }
    }
}

/// Floor a timestamp to its 60-second bucket (epoch seconds).
pub(crate) fn bucket_of(ts: DateTime<Utc>) -> i64 {
    let secs = ts.timestamp();
    secs - secs.rem_euclid(BUCKET_SECS)
}

/// Bucket keys in order of first appearance, plus each snapshot's bucket.
///
/// Snapshots are chronologically ordered, so first appearance order is
/// also chronological order.
pub(crate) fn assign_buckets(snapshots: &[MarketSnapshot]) -> (Vec<i64>, Vec<i64>) {
    let mut buckets = Vec::new();
    let mut per_snapshot = Vec::with_capacity(snapshots.len());
    for snapshot in snapshots {
        let bucket = bucket_of(snapshot.timestamp());
        if buckets.last() != Some(&bucket) {
            buckets.push(bucket);
        }
        per_snapshot.push(bucket);
    }
    (buckets, per_snapshot)
}
