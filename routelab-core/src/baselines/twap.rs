//! TWAP baseline — equal target per 60-second bucket.

use super::assign_buckets;
use crate::domain::{ExecutionReport, FillRecord, FillState, MarketSnapshot};

/// Time-weighted execution: the timeline is cut into 60-second buckets,
/// each targeting an equal share of the order (integer division; any
/// remainder is simply never scheduled). Within a bucket, fills come
/// opportunistically from each snapshot's first venue only — a known
/// simplification kept from the original comparison runs.
pub fn twap_60s(snapshots: &[MarketSnapshot], order_size: u64) -> ExecutionReport {
    if snapshots.is_empty() {
        return ExecutionReport::empty();
    }

    let (buckets, per_snapshot) = assign_buckets(snapshots);
    let per_bucket = order_size / buckets.len() as u64;

    let mut state = FillState::default();
    let mut fills = Vec::new();

    'buckets: for bucket in &buckets {
        let mut bucket_remaining = per_bucket;

        for (snapshot, snapshot_bucket) in snapshots.iter().zip(&per_snapshot) {
            if snapshot_bucket != bucket {
                continue;
            }

            let venue = snapshot.first_venue();
            let take = venue
                .ask_size
                .min(bucket_remaining)
                .min(state.remaining(order_size));

            if take > 0 {
                state = state.absorb(take, venue.ask + venue.fee);
                bucket_remaining -= take;
                fills.push(FillRecord {
                    ts: venue.ts,
                    qty: take,
                    price: venue.ask,
                    fee: venue.fee,
                    cost: take as f64 * (venue.ask + venue.fee),
                    cumulative_fill: state.filled,
                    cumulative_cash: state.cash,
                });
            }

            if state.is_complete(order_size) {
                break 'buckets;
            }
            if bucket_remaining == 0 {
                break;
            }
        }
    }

    ExecutionReport::new(state, fills)
}
