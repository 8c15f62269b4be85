//! # Vintage Math
//!
//! Numerical utilities for the Vintage private equity analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketing root-finding algorithms (Brent, Bisection)
//!   used to back out internal rates of return from dated cash flows
//!
//! ## Design Philosophy
//!
//! - **No Domain Knowledge**: Plain `f64 -> f64` objectives; cash flow
//!   semantics live upstream
//! - **Numerical Stability**: Non-finite objective values surface as
//!   errors instead of poisoning the iteration
//!
//! ## Example
//!
//! ```rust
//! use vintage_math::solvers::{brent, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
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
#![allow(clippy::float_cmp)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, brent, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
