//! Greedy best-ask baseline.

use std::cmp::Ordering;

use crate::domain::{ExecutionReport, FillRecord, FillState, MarketSnapshot};

/// Per snapshot, take from the lowest-ask venue until the target is met.
///
/// The replay stops the first time the chosen venue offers nothing
/// (zero-size best ask), matching the original router's comparison runs.
pub fn best_ask(snapshots: &[MarketSnapshot], order_size: u64) -> ExecutionReport {
    let mut state = FillState::default();
    let mut fills = Vec::new();

    for snapshot in snapshots {
        let best = snapshot
            .venues
            .iter()
            .min_by(|a, b| a.ask.partial_cmp(&b.ask).unwrap_or(Ordering::Equal));
        let venue = match best {
            Some(venue) => venue,
            None => break,
        };

        let take = state.remaining(order_size).min(venue.ask_size);
        if take == 0 {
            break;
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

    ExecutionReport::new(state, fills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VenueQuote;
    use chrono::{Duration, TimeZone, Utc};

    fn snapshot(offset_secs: i64, quotes: &[(f64, u64)]) -> MarketSnapshot {
        let ts = Utc.with_ymd_and_hms(2024, 8, 1, 14, 0, 0).unwrap()
            + Duration::seconds(offset_secs);
        MarketSnapshot::new(
            quotes
                .iter()
                .map(|&(ask, ask_size)| VenueQuote {
                    ask,
                    ask_size,
                    mid: 10.0,
                    fee: 0.001,
                    rebate: 0.0,
                    ts,
                })
                .collect(),
        )
    }

    #[test]
    fn picks_cheapest_venue_each_snapshot() {
        let snaps = vec![snapshot(0, &[(10.5, 400), (10.0, 400)])];
        let report = best_ask(&snaps, 300);
        assert_eq!(report.filled, 300);
        assert!((report.total_cash - 300.0 * 10.001).abs() < 1e-9);
    }

    #[test]
    fn spans_snapshots_until_target() {
        let snaps = vec![
            snapshot(0, &[(10.0, 200)]),
            snapshot(1, &[(10.2, 200)]),
            snapshot(2, &[(10.4, 200)]),
        ];
        let report = best_ask(&snaps, 500);
        assert_eq!(report.filled, 500);
        assert_eq!(report.fills.len(), 3);
        assert_eq!(report.fills[2].qty, 100);
    }

    #[test]
    fn stops_at_zero_size_best_ask() {
        // Best ask (10.0) has zero size; the replay halts there even though
        // a later snapshot has liquidity.
        let snaps = vec![
            snapshot(0, &[(10.0, 0), (10.5, 400)]),
            snapshot(1, &[(10.0, 400)]),
        ];
        let report = best_ask(&snaps, 300);
        assert_eq!(report.filled, 0);
        assert!(report.avg_price.is_infinite());
    }

    #[test]
    fn never_overfills() {
        let snaps = vec![snapshot(0, &[(10.0, 1000)])];
        let report = best_ask(&snaps, 250);
        assert_eq!(report.filled, 250);
    }
}
