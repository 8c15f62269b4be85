//! # Vintage Core
//!
//! Core types, traits, and abstractions for the Vintage private equity
//! analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Vintage:
//!
//! - **Types**: Domain-specific types like `Date`, `CashFlow`, `Currency`,
//!   `VehicleStatus`
//! - **Day Count Conventions**: The `DayCount` trait and `Act365Fixed`
//! - **Errors**: Structured error handling shared by the member crates
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Absent Is Not An Error**: Metrics that cannot be computed are
//!   `None`, never a panic or an error value
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use vintage_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let call = CashFlow::outflow(Date::from_ymd(2020, 1, 15).unwrap(), dec!(250000));
//! let dist = CashFlow::inflow(Date::from_ymd(2022, 6, 30).unwrap(), dec!(400000));
//! let schedule: CashFlowSchedule = vec![call, dist].into_iter().collect();
//! assert!(schedule.has_sign_variety());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::if_not_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{VintageError, VintageResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, Currency, Date, VehicleStatus};
}

// Re-export commonly used types at crate root
pub use error::{VintageError, VintageResult};
pub use types::{CashFlow, CashFlowSchedule, Currency, Date, VehicleStatus};
