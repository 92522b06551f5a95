//! Exhaustive allocation search over discretized splits.
//!
//! Candidate splits are built venue-major in an explicit frontier arena:
//! each venue multiplies the partial allocations by its candidate
//! quantities. Growth is combinatorial — O(∏ (cap/step + 1)) complete
//! splits — so the arena is bounded by [`MAX_CANDIDATES`] and exceeding it
//! is an error rather than an OOM.
//!
//! Candidate quantities for a venue are multiples of the lot step from 0 up
//! to min(remaining target, ask size), with the upper bound itself
//! excluded. A venue therefore never receives its full displayed size
//! unless a smaller step lands on it exactly; this boundary is kept for
//! compatibility with the original router's results. A venue whose bound is
//! zero contributes the single candidate 0.

use thiserror::Error;

use crate::cost::{score, CostParams};
use crate::domain::VenueQuote;

/// Hard ceiling on partial allocations held in the arena at once.
pub const MAX_CANDIDATES: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("candidate budget exceeded: more than {MAX_CANDIDATES} partial allocations; reduce venues, order size, or increase the lot step")]
    BudgetExceeded,
    #[error("no candidate allocations were generated")]
    NoCandidates,
}

/// A scored split: one quantity per venue, positionally aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub split: Vec<u64>,
    pub cost: f64,
}

/// Candidate quantities for one venue given its effective cap.
///
/// Multiples of `step` in `[0, cap)`; `{0}` when the cap is zero.
pub fn candidate_quantities(cap: u64, step: u64) -> Vec<u64> {
    debug_assert!(step > 0, "lot step must be positive");
    if cap == 0 {
        return vec![0];
    }
    (0..cap).step_by(step as usize).collect()
}

/// Enumerate every feasible split, venue-major, quantity-minor ascending.
pub fn enumerate_splits(
    order_size: u64,
    venues: &[VenueQuote],
    step: u64,
) -> Result<Vec<Vec<u64>>, SearchError> {
    let mut arena: Vec<Vec<u64>> = vec![Vec::with_capacity(venues.len())];

    for venue in venues {
        let mut expanded = Vec::with_capacity(arena.len());
        for partial in &arena {
            let used: u64 = partial.iter().sum();
            let cap = order_size.saturating_sub(used).min(venue.ask_size);
            for qty in candidate_quantities(cap, step) {
                let mut next = partial.clone();
                next.push(qty);
                expanded.push(next);
                if expanded.len() > MAX_CANDIDATES {
                    return Err(SearchError::BudgetExceeded);
                }
            }
        }
        arena = expanded;
    }

    Ok(arena)
}

/// Score every feasible split and return the minimum-cost one.
///
/// Ties break to the first-encountered split in enumeration order
/// (venue-major, quantity-minor, ascending) via the strict `<` comparison.
pub fn best_split(
    order_size: u64,
    venues: &[VenueQuote],
    params: &CostParams,
    step: u64,
) -> Result<Allocation, SearchError> {
    let splits = enumerate_splits(order_size, venues, step)?;

    let mut best: Option<Allocation> = None;
    for split in splits {
        let cost = score(&split, venues, order_size, params);
        let improves = match &best {
            Some(current) => cost < current.cost,
            None => true,
        };
        if improves {
            best = Some(Allocation { split, cost });
        }
    }
    best.ok_or(SearchError::NoCandidates)
}
