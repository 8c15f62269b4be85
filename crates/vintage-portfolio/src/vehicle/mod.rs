//! Investment vehicle representation and construction.
//!
//! This module provides the core [`InvestmentVehicle`] type and
//! [`VehicleBuilder`] for constructing vehicles with consistent ledgers.

mod balance;
mod builder;
#[allow(clippy::module_inception)]
mod vehicle;

pub use builder::VehicleBuilder;
pub use vehicle::InvestmentVehicle;
