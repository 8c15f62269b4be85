//! Root-finding algorithms.
//!
//! This module provides the numerical solvers used for internal rate
//! of return calculations:
//!
//! - [`brent`]: Robust method combining bisection, secant, and inverse
//!   quadratic interpolation
//! - [`bisection`]: Simple and reliable bracketing method
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! Both require a bracketing interval with a sign change. IRR
//! objectives give one for free: a schedule with both contributions
//! and distributions crosses zero somewhere in the standard search
//! interval for any realistic deal.
//!
//! # Example: IRR-Style Calculation
//!
//! ```rust
//! use vintage_math::solvers::{brent, SolverConfig};
//!
//! // -1000 today, +1331 in three years: rate is 10%
//! let npv = |r: f64| -1000.0 + 1331.0 / (1.0 + r).powf(3.0);
//!
//! let result = brent(npv, -0.99, 10.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-8);
//! ```

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
