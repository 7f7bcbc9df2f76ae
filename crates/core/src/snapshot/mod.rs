//! Financial aggregation and derived ratios.
//!
//! This module is a pure, synchronous computation: it takes a slice of
//! transactions and produces a complete `FinancialSnapshot` (income
//! statement, balance-sheet buckets, equity, ratios, and per-category
//! breakdowns). It has no I/O, no state, and no failure path for valid
//! domain values.

pub mod classify;
pub mod ratio;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use classify::{BalanceSheetSlot, COGS_CATEGORY};
pub use service::SnapshotService;
pub use types::{CategoryTotals, FinancialSnapshot};
