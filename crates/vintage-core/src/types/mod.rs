//! Domain types for private equity analytics.
//!
//! This module provides type-safe representations of fund concepts:
//!
//! - [`Date`]: Calendar date for cash flow calculations
//! - [`CashFlow`]: Dated, signed cash flow amount
//! - [`CashFlowSchedule`]: Date-ordered flow sequence
//! - [`Currency`]: ISO currency codes
//! - [`VehicleStatus`]: Vehicle lifecycle state

mod cashflow;
mod currency;
mod date;
mod status;

pub use cashflow::{CashFlow, CashFlowSchedule};
pub use currency::Currency;
pub use date::Date;
pub use status::VehicleStatus;
