//! # Vintage Metrics
//!
//! Fund performance metrics for the Vintage private equity analytics
//! library.
//!
//! This crate provides:
//!
//! - **XIRR**: Annualized internal rate of return for irregularly dated
//!   flows, solved by bracketing root search
//! - **XNPV**: Net present value at an explicit annual rate
//! - **Capital multiples**: TVPI, DPI, RVPI, and MOIC with provenance
//! - **Modified IRR**: The aggregate rate for merged multi-vehicle flow
//!   sets, where ordinary IRR is unreliable
//! - **Formatting**: Report rendering with a uniform treatment of
//!   undefined values
//!
//! ## Design Philosophy
//!
//! - **Undefined Is None**: A metric that cannot be computed from its
//!   inputs is `Option::None`, never zero, NaN, or a guess
//! - **Decimal At The Edges**: Money and reported ratios are
//!   `rust_decimal::Decimal`; `f64` appears only inside the solvers
//! - **ACT/365F Throughout**: One day count basis for every metric
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use vintage_core::types::{CashFlow, CashFlowSchedule, Date};
//! use vintage_metrics::prelude::*;
//!
//! let mut flows = CashFlowSchedule::new();
//! flows.push(CashFlow::new(Date::from_ymd(2021, 1, 1).unwrap(), dec!(-1000)));
//! flows.push(CashFlow::new(Date::from_ymd(2022, 1, 1).unwrap(), dec!(1100)));
//!
//! assert_eq!(xirr(&flows), Some(dec!(0.1)));
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
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::if_not_else)]
#![allow(clippy::uninlined_format_args)]

pub mod discount;
pub mod error;
pub mod format;
pub mod mirr;
pub mod ratios;
pub mod xirr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::discount::xnpv;
    pub use crate::error::{MetricsError, MetricsResult};
    pub use crate::mirr::ModifiedIrr;
    pub use crate::ratios::{
        dpi, gap_to_target, moic, rvpi, tvpi, Moic, MultipleCheck, RvpiTier,
    };
    pub use crate::xirr::{xirr, XirrCalculator};
}

pub use error::{MetricsError, MetricsResult};
