//! # Vintage Portfolio
//!
//! Fund and portfolio analytics for private market investments.
//!
//! This crate models investment vehicles as transaction ledgers and
//! derives performance metrics from them using the Vintage metrics
//! library.
//!
//! ## Design Philosophy
//!
//! - **Ledger first**: a vehicle is its records; balances, NAV, and
//!   flows are always derived, never stored independently
//! - **Pure functions**: all calculations are stateless with explicit
//!   inputs
//! - **Undefined is `None`**: a metric that cannot be computed is
//!   absent, not zero
//! - **Config-driven parallelism**: optional rayon support with
//!   threshold-based switching
//!
//! ## Features
//!
//! - **Transaction Ledgers**: calls, distributions, and valuations with
//!   FX conversion and derived running balances
//! - **NAV Resolution**: latest valuation, cost-basis fallback, closed
//!   vehicles at zero
//! - **Metrics Snapshots**: XIRR, TVPI, DPI, RVPI, MOIC, XNPV, and
//!   target comparisons per vehicle
//! - **Portfolio Aggregation**: modified IRR over merged schedules and
//!   totals-based multiples
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vintage_portfolio::prelude::*;
//!
//! // Build a vehicle from its ledger
//! let fund = InvestmentVehicle::builder("Growth Fund III")
//!     .target_irr(dec!(0.15))
//!     .add_record(CashFlowRecord::investment(call_date, dec!(1_000_000))?)
//!     .add_record(CashFlowRecord::valuation_update(mark_date, dec!(1_200_000)))
//!     .build()?;
//!
//! // Per-vehicle metrics
//! let snapshot = MetricsSnapshot::compute(&fund);
//!
//! // Portfolio-level rollup
//! let portfolio = Portfolio::builder("2019 Program").add_vehicle(fund).build()?;
//! let summary = portfolio.summary(&MetricsConfig::default());
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Snapshots, aggregation, and parallel helpers
//! - [`flows`] - Ledger-to-schedule conversion and terminal valuation policy
//! - [`portfolio`] - Portfolio and builder types
//! - [`types`] - Core types (CashFlowRecord, MetricsConfig)
//! - [`vehicle`] - Investment vehicle and builder types
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod analytics;
pub mod error;
pub mod flows;
pub mod portfolio;
pub mod types;
pub mod vehicle;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{CashFlowRecord, MetricsConfig, RecordKind};

// Re-export vehicle types
pub use vehicle::{InvestmentVehicle, VehicleBuilder};

// Re-export flow building
pub use flows::{vehicle_flows, TerminalValuation};

// Re-export portfolio types
pub use portfolio::{Portfolio, PortfolioBuilder};

// Re-export analytics types and functions
pub use analytics::{
    aggregate_irr, compute_metrics, maybe_parallel_map, MetricsSnapshot, PortfolioSummary,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use vintage_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Ledger types
    pub use crate::types::{CashFlowRecord, MetricsConfig, RecordKind};

    // Vehicle types
    pub use crate::vehicle::{InvestmentVehicle, VehicleBuilder};

    // Flow building
    pub use crate::flows::{vehicle_flows, TerminalValuation};

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Analytics
    pub use crate::analytics::{
        aggregate_irr, compute_metrics, MetricsSnapshot, PortfolioSummary,
    };

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
    pub use vintage_core::types::{Currency, Date, VehicleStatus};
    pub use vintage_metrics::ratios::{Moic, MultipleCheck, RvpiTier};
}
