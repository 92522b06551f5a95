//! Router replay — fold one parameter set over the snapshot sequence.
//!
//! The fold threads a [`FillState`] by value through the chronologically
//! ordered snapshots, re-running the allocation search on the remaining
//! target at each step and stopping as soon as the target is met. Executed
//! quantity is doubly capped: by the venue's displayed size and by the
//! quantity still owed toward the target, so the cumulative fill can never
//! overshoot.
//!
//! Cash accrues at `ask + fee` per share (absolute cost); only the cost
//! model's *score* is mid-relative.

use crate::cost::CostParams;
use crate::domain::{ExecutionReport, FillRecord, FillState, MarketSnapshot};
use crate::search::{best_split, SearchError};

/// Replay the calibrated router over a snapshot sequence.
///
/// Pure in `(params, snapshots)`: no hidden state, safe to evaluate
/// concurrently across trials. Zero fill yields the `+inf` average-price
/// sentinel in the returned report.
pub fn replay_router(
    snapshots: &[MarketSnapshot],
    order_size: u64,
    params: &CostParams,
    step: u64,
) -> Result<ExecutionReport, SearchError> {
    let mut state = FillState::default();
    let mut fills = Vec::new();

    for snapshot in snapshots {
        let remaining = state.remaining(order_size);
        if remaining == 0 {
            break;
        }

        let allocation = best_split(remaining, &snapshot.venues, params, step)?;

        for (qty, venue) in allocation.split.iter().zip(&snapshot.venues) {
            let executed = (*qty).min(venue.ask_size);
            let take = executed.min(state.remaining(order_size));
            if take == 0 {
                continue;
            }

            state = state.absorb(take, venue.ask + venue.fee);
            fills.push(FillRecord {
                ts: venue.ts,
                qty: take,
                price: venue.ask,
                fee: venue.fee,
                cost: take as f64 * (venue.ask + venue.fee),
                cumulative_fill: state.filled,
                cumulative_cash: state.cash,
            });

            if state.is_complete(order_size) {
                break;
            }
        }
    }

    Ok(ExecutionReport::new(state, fills))
}
