//! Domain types for portfolio analytics.
//!
//! This module provides type-safe representations of fund concepts:
//!
//! - [`CashFlowRecord`]: A dated ledger entry (call, distribution, or valuation)
//! - [`RecordKind`]: The direction of a ledger entry
//! - [`MetricsConfig`]: Configuration for metrics computation

mod config;
mod record;

// Re-export all types
pub use config::MetricsConfig;
pub use record::{CashFlowRecord, RecordKind};
