//! Penalty cost model — scores one candidate allocation against one snapshot.
//!
//! Cash is mid-relative here (slippage plus taker fee), unlike the replay,
//! which accrues absolute cost at ask + fee. Unexecuted remainder earns a
//! rebate. Target mismatch is penalized symmetrically by `theta_queue` and
//! asymmetrically by `lambda_under` / `lambda_over`.

use serde::{Deserialize, Serialize};

use crate::domain::VenueQuote;

/// Nonnegative penalty weights for the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParams {
    /// Penalty per share of overfill.
    pub lambda_over: f64,
    /// Penalty per share of underfill.
    pub lambda_under: f64,
    /// Direction-independent penalty per share of target mismatch.
    pub theta_queue: f64,
}

impl CostParams {
    pub fn new(lambda_over: f64, lambda_under: f64, theta_queue: f64) -> Self {
        debug_assert!(
            lambda_over >= 0.0 && lambda_under >= 0.0 && theta_queue >= 0.0,
            "cost weights must be nonnegative"
        );
        Self {
            lambda_over,
            lambda_under,
            theta_queue,
        }
    }
}

/// Score a candidate split against a snapshot's venues.
///
/// Pure and deterministic. Per venue: executed quantity is capped by the
/// displayed ask size; the capped quantity pays `ask - mid + fee` per
/// share; the resting remainder earns `rebate` per share, subtracted from
/// cash. Underfill/overfill use saturating arithmetic so quantities never
/// go negative.
///
/// `split.len()` must equal `venues.len()`; split index i refers to venue i.
pub fn score(split: &[u64], venues: &[VenueQuote], order_size: u64, params: &CostParams) -> f64 {
    debug_assert_eq!(split.len(), venues.len(), "split/venue length mismatch");

    let mut executed: u64 = 0;
    let mut cash_spent = 0.0;

    for (qty, venue) in split.iter().zip(venues) {
        let executed_here = (*qty).min(venue.ask_size);
        executed += executed_here;
        cash_spent += executed_here as f64 * (venue.ask - venue.mid + venue.fee);
        let resting = qty.saturating_sub(executed_here);
        cash_spent -= resting as f64 * venue.rebate;
    }

    let underfill = order_size.saturating_sub(executed);
    let overfill = executed.saturating_sub(order_size);
    let risk_penalty = params.theta_queue * (underfill + overfill) as f64;
    let cost_penalty =
        params.lambda_under * underfill as f64 + params.lambda_over * overfill as f64;
    cash_spent + risk_penalty + cost_penalty
}
