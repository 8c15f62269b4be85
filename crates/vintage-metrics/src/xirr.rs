//! Internal rate of return for irregularly dated flows (XIRR).
//!
//! XIRR is the annually compounded rate at which the net present
//! value of a dated flow schedule is zero. The root is bracketed on a
//! fixed interval and solved numerically; schedules for which no rate
//! is defined (one-sided flows, no sign change of NPV over the
//! interval, non-convergence) report `None` instead of erroring.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use vintage_core::types::{CashFlow, CashFlowSchedule, Date};
//! use vintage_metrics::xirr::xirr;
//!
//! let mut flows = CashFlowSchedule::new();
//! flows.push(CashFlow::new(Date::from_ymd(2021, 1, 1).unwrap(), dec!(-1000)));
//! flows.push(CashFlow::new(Date::from_ymd(2022, 1, 1).unwrap(), dec!(1100)));
//!
//! assert_eq!(xirr(&flows), Some(dec!(0.100000)));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use vintage_core::types::CashFlowSchedule;
use vintage_math::solvers::{bisection, brent, SolverConfig};
use vintage_math::MathError;

use crate::discount::{discount_factor, year_fraction};
use crate::error::{MetricsError, MetricsResult};

/// Lower end of the default search interval (-99% per annum).
pub const DEFAULT_BRACKET_LOW: f64 = -0.99;

/// Upper end of the default search interval (+1000% per annum).
pub const DEFAULT_BRACKET_HIGH: f64 = 10.0;

/// Decimal places reported for solved rates.
pub const RATE_PRECISION: u32 = 6;

/// XIRR calculator.
///
/// Holds the solver configuration and search interval. Solving uses
/// Brent's method first and falls back to bisection once if Brent
/// fails to converge; the interval endpoints must straddle the root,
/// which the default interval of -99% to +1000% does for any schedule
/// a fund ledger realistically produces.
#[derive(Debug, Clone)]
pub struct XirrCalculator {
    config: SolverConfig,
    bracket: (f64, f64),
}

impl XirrCalculator {
    /// Creates a calculator with default solver settings and the
    /// default search interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            bracket: (DEFAULT_BRACKET_LOW, DEFAULT_BRACKET_HIGH),
        }
    }

    /// Sets the solver convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the solver iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the search interval.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidBracket`] unless
    /// `-1 < low < high`.
    pub fn with_bracket(mut self, low: f64, high: f64) -> MetricsResult<Self> {
        if !(low > -1.0 && low < high) {
            return Err(MetricsError::invalid_bracket(low, high));
        }
        self.bracket = (low, high);
        Ok(self)
    }

    /// Solves for the internal rate of return of a schedule.
    ///
    /// Flows are discounted to the earliest date in the schedule on an
    /// ACT/365F basis and the solved rate is rounded to six decimal
    /// places. Returns `None` when the rate is undefined: fewer than
    /// two flows, flows all on one side of zero, NPV with the same
    /// sign at both interval ends, or solver non-convergence.
    #[must_use]
    pub fn solve(&self, flows: &CashFlowSchedule) -> Option<Decimal> {
        if flows.len() < 2 || !flows.has_sign_variety() {
            return None;
        }

        let date0 = flows.iter().map(|cf| cf.date()).min()?;
        let cf_data: Vec<(f64, f64)> = flows
            .iter()
            .map(|cf| {
                let years = year_fraction(date0, cf.date());
                let amount = cf.amount().to_f64().unwrap_or(0.0);
                (years, amount)
            })
            .collect();

        let objective = |rate: f64| {
            cf_data
                .iter()
                .map(|&(years, amount)| amount * discount_factor(rate, years))
                .sum::<f64>()
        };

        let (low, high) = self.bracket;
        let result = match brent(&objective, low, high, &self.config) {
            Ok(result) => result,
            Err(MathError::ConvergenceFailed { iterations, residual }) => {
                log::debug!(
                    "brent stalled after {iterations} iterations (residual {residual:e}), retrying with bisection"
                );
                bisection(&objective, low, high, &self.config).ok()?
            }
            Err(_) => return None,
        };

        Decimal::from_f64_retain(result.root).map(|rate| rate.round_dp(RATE_PRECISION))
    }
}

impl Default for XirrCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculates XIRR with default settings.
///
/// Convenience wrapper over [`XirrCalculator`] for the common case.
#[must_use]
pub fn xirr(flows: &CashFlowSchedule) -> Option<Decimal> {
    XirrCalculator::new().solve(flows)
}
