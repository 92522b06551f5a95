//! VWAP baseline — bucket targets weighted by observed volume.

use super::assign_buckets;
use crate::domain::{ExecutionReport, FillRecord, FillState, MarketSnapshot};

/// Volume-weighted execution: each 60-second bucket's target is the order
/// size scaled by that bucket's share of total observed volume (first-venue
/// ask sizes, truncated to whole shares). The final bucket absorbs the
/// rounding remainder so the scheduled targets sum exactly to the order
/// size. Fills consume each bucket's first-venue quotes in order, triple
/// capped by quote size, bucket target, and overall remaining target.
///
/// Zero total observed volume returns the empty sentinel report.
pub fn vwap_volume_weighted(snapshots: &[MarketSnapshot], order_size: u64) -> ExecutionReport {
    if snapshots.is_empty() {
        return ExecutionReport::empty();
    }

    let (buckets, per_snapshot) = assign_buckets(snapshots);

    let mut volume_by_bucket = vec![0u64; buckets.len()];
    for (snapshot, snapshot_bucket) in snapshots.iter().zip(&per_snapshot) {
        let idx = buckets
            .iter()
            .position(|b| b == snapshot_bucket)
            .unwrap_or(0);
        volume_by_bucket[idx] += snapshot.first_venue().ask_size;
    }

    let total_volume: u64 = volume_by_bucket.iter().sum();
    if total_volume == 0 {
        return ExecutionReport::empty();
    }

    let mut state = FillState::default();
    let mut fills = Vec::new();
    let mut allocated_so_far: u64 = 0;

    'buckets: for (idx, bucket) in buckets.iter().enumerate() {
        let mut bucket_target = if idx == buckets.len() - 1 {
            order_size.saturating_sub(allocated_so_far)
        } else {
            let share = volume_by_bucket[idx] as f64 / total_volume as f64;
            let target = (order_size as f64 * share) as u64;
            allocated_so_far += target;
            target
        };

        for (snapshot, snapshot_bucket) in snapshots.iter().zip(&per_snapshot) {
            if snapshot_bucket != bucket {
                continue;
            }

            let venue = snapshot.first_venue();
            let to_fill = venue
                .ask_size
                .min(bucket_target)
                .min(state.remaining(order_size));
            if to_fill == 0 {
                continue;
            }

            state = state.absorb(to_fill, venue.ask + venue.fee);
            bucket_target -= to_fill;
            fills.push(FillRecord {
                ts: venue.ts,
                qty: to_fill,
                price: venue.ask,
                fee: venue.fee,
                cost: to_fill as f64 * (venue.ask + venue.fee),
                cumulative_fill: state.filled,
                cumulative_cash: state.cash,
            });

            if state.is_complete(order_size) {
                break 'buckets;
            }
        }
    }

    ExecutionReport::new(state, fills)
}
