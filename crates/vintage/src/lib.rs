//! # Vintage
//!
//! Private equity performance analytics: fund ledgers, capital
//! multiples, and dated-flow rate solving.
//!
//! This crate is a facade re-exporting the public API of the Vintage
//! workspace:
//!
//! - `core` — domain types: dates, currencies, cash flows, day counts
//! - `math` — bracketing root solvers
//! - `metrics` — XIRR, XNPV, modified IRR, and capital ratios
//! - `portfolio` — vehicles, ledgers, snapshots, and rollups
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vintage::prelude::*;
//!
//! let fund = InvestmentVehicle::builder("Buyout Fund I")
//!     .add_record(CashFlowRecord::investment(
//!         Date::from_ymd(2020, 1, 1)?,
//!         dec!(1_000_000),
//!     )?)
//!     .add_record(CashFlowRecord::valuation_update(
//!         Date::from_ymd(2022, 1, 1)?,
//!         dec!(1_350_000),
//!     ))
//!     .build()?;
//!
//! let snapshot = compute_metrics(&fund);
//! println!("TVPI: {:?}, XIRR: {:?}", snapshot.tvpi, snapshot.xirr);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` — rayon-backed fan-out for portfolio snapshots

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use vintage_core as core;
pub use vintage_math as math;
pub use vintage_metrics as metrics;
pub use vintage_portfolio as portfolio;

/// Commonly used imports for fund analytics.
pub mod prelude {
    pub use vintage_portfolio::prelude::*;
}
