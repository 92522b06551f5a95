//! Snapshot ingestion from L1 quote data.

mod ingest;

pub use ingest::{load_snapshots, read_snapshots, DataError};
