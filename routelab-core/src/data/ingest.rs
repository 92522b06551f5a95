//! L1 quote CSV ingestion.
//!
//! Expected columns: `ts_event`, `publisher_id`, `ask_px_00`, `ask_sz_00`,
//! `price` (the reference mid). Rows are sorted chronologically, deduped to
//! the first record per `(ts_event, publisher_id)`, and rows sharing a
//! timestamp become one [`MarketSnapshot`]. Venue order within a snapshot
//! is record order, which keeps it stable for the run.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{MarketSnapshot, VenueQuote};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open quote file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode quote row: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid timestamp '{0}'")]
    Timestamp(String),
}

#[derive(Debug, Deserialize)]
struct QuoteRow {
    ts_event: String,
    publisher_id: u64,
    ask_px_00: f64,
    ask_sz_00: u64,
    price: f64,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DataError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    // Naive timestamps are taken as UTC.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| DataError::Timestamp(raw.to_string()))
}

/// Load snapshots from a quote CSV on disk.
///
/// `fee` and `rebate` are applied uniformly to every venue.
pub fn load_snapshots(path: &Path, fee: f64, rebate: f64) -> Result<Vec<MarketSnapshot>, DataError> {
    read_snapshots(File::open(path)?, fee, rebate)
}

/// Load snapshots from any reader of quote CSV data.
pub fn read_snapshots<R: Read>(
    reader: R,
    fee: f64,
    rebate: f64,
) -> Result<Vec<MarketSnapshot>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut rows: Vec<(DateTime<Utc>, QuoteRow)> = Vec::new();
    for record in csv_reader.deserialize() {
        let row: QuoteRow = record?;
        let ts = parse_timestamp(&row.ts_event)?;
        rows.push((ts, row));
    }

    // Stable sort: records at the same timestamp keep file order.
    rows.sort_by_key(|(ts, _)| *ts);

    // First record wins per (timestamp, venue).
    let mut seen: HashSet<(DateTime<Utc>, u64)> = HashSet::new();
    let mut snapshots: Vec<MarketSnapshot> = Vec::new();

    for (ts, row) in rows {
        if !seen.insert((ts, row.publisher_id)) {
            continue;
        }
        let quote = VenueQuote {
            ask: row.ask_px_00,
            ask_size: row.ask_sz_00,
            mid: row.price,
            fee,
            rebate,
            ts,
        };
        match snapshots.last_mut() {
            Some(snapshot) if snapshot.timestamp() == ts => snapshot.venues.push(quote),
            _ => snapshots.push(MarketSnapshot::new(vec![quote])),
        }
    }

    Ok(snapshots)
}
