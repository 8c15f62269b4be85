//! Vehicle- and portfolio-level metrics.
//!
//! This module turns ledgers into performance numbers:
//! - Per-vehicle snapshots (XIRR, multiples, target comparisons)
//! - Portfolio aggregation (modified IRR, totals-based multiples)
//! - Conditional parallelism for large portfolios
//!
//! All functions are pure - they take vehicles and configuration as
//! input and return computed results. No caching, no I/O, no side
//! effects beyond debug logging.

mod aggregate;
mod parallel;
mod snapshot;

pub use aggregate::*;
pub use parallel::*;
pub use snapshot::*;
