//! RouteLab Core — smart-order-router backtest engine.
//!
//! This crate contains the heart of the router backtest:
//! - Domain types (venue quotes, snapshots, fill state, fill records)
//! - Penalty cost model for scoring candidate allocations
//! - Exhaustive allocation search over discretized splits
//! - Snapshot replay fold with liquidity/target capping and early exit
//! - Baseline execution strategies (best-ask, TWAP, VWAP)
//! - L1 quote CSV ingestion
//! - Deterministic per-trial RNG seed derivation

pub mod baselines;
pub mod cost;
pub mod data;
pub mod domain;
pub mod replay;
pub mod rng;
pub mod search;
