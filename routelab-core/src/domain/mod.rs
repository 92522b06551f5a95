//! Domain types shared across the engine: quotes, snapshots, and fill tracking.

mod fill;
mod quote;

pub use fill::{ExecutionReport, FillRecord, FillState};
pub use quote::{MarketSnapshot, VenueQuote};
