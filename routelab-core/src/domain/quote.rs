//! VenueQuote and MarketSnapshot — the fundamental market data units.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-of-book ask quote for a single venue at one instant.
///
/// `fee` is the taker fee per share, `rebate` the credit per share offered
/// but not immediately executed (a resting-order incentive). Prices and
/// fees are in currency units per share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueQuote {
    pub ask: f64,
    pub ask_size: u64,
    /// Reference mid price used for mid-relative slippage in the cost model.
    pub mid: f64,
    pub fee: f64,
    pub rebate: f64,
    pub ts: DateTime<Utc>,
}

impl VenueQuote {
    /// Basic sanity check: finite prices, positive ask.
    pub fn is_sane(&self) -> bool {
        self.ask.is_finite()
            && self.mid.is_finite()
            && self.fee.is_finite()
            && self.rebate.is_finite()
            && self.ask > 0.0
    }
}

/// A consistent cross-venue view at one timestamp.
///
/// Venue order is positional and stable for a run: `split[i]` in an
/// allocation always refers to `venues[i]`. Snapshots are validated
/// non-empty before any replay begins (see the calibrator preconditions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub venues: Vec<VenueQuote>,
}

impl MarketSnapshot {
    pub fn new(venues: Vec<VenueQuote>) -> Self {
        debug_assert!(!venues.is_empty(), "snapshot must have at least one venue");
        Self { venues }
    }

    /// Timestamp shared by every venue in the snapshot.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.venues[0].ts
    }

    /// First venue in positional order (the only venue TWAP/VWAP consume).
    pub fn first_venue(&self) -> &VenueQuote {
        &self.venues[0]
    }

    /// Total displayed ask size across venues.
    pub fn total_ask_size(&self) -> u64 {
        self.venues.iter().map(|v| v.ask_size).sum()
    }
}
