//! Modified internal rate of return for merged flow sets.
//!
//! Concatenating many vehicles' flows produces many sign alternations,
//! and ordinary IRR is then unreliable: the NPV polynomial can have
//! zero, one, or several roots. Modified IRR sidesteps the root search
//! entirely by compounding both sides of the ledger at explicit rates:
//! capital calls are discounted to the earliest date at the finance
//! rate, distributions are grown to the latest date at the reinvestment
//! rate, and the result is the annualized ratio of the two. It is
//! uniquely defined whenever both signs are present.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use vintage_core::types::CashFlowSchedule;

use crate::discount::{discount_factor, future_value, year_fraction};
use crate::error::{MetricsError, MetricsResult};
use crate::xirr::RATE_PRECISION;

/// Default annual discount rate applied to capital calls (8%).
pub const DEFAULT_FINANCE_RATE: f64 = 0.08;

/// Default annual reinvestment rate applied to distributions (6%).
pub const DEFAULT_REINVEST_RATE: f64 = 0.06;

/// Modified IRR calculator.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use vintage_core::types::{CashFlow, CashFlowSchedule, Date};
/// use vintage_metrics::mirr::ModifiedIrr;
///
/// let mut flows = CashFlowSchedule::new();
/// flows.push(CashFlow::new(Date::from_ymd(2020, 1, 1).unwrap(), dec!(-1000)));
/// flows.push(CashFlow::new(Date::from_ymd(2023, 1, 1).unwrap(), dec!(1500)));
///
/// let rate = ModifiedIrr::default().aggregate(&flows).unwrap();
/// assert_eq!(rate, dec!(0.144573));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedIrr {
    finance_rate: f64,
    reinvest_rate: f64,
}

impl Default for ModifiedIrr {
    fn default() -> Self {
        Self {
            finance_rate: DEFAULT_FINANCE_RATE,
            reinvest_rate: DEFAULT_REINVEST_RATE,
        }
    }
}

impl ModifiedIrr {
    /// Creates a calculator with explicit rates.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidRate`] if either rate is at or
    /// below -100%.
    pub fn new(finance_rate: f64, reinvest_rate: f64) -> MetricsResult<Self> {
        if finance_rate <= -1.0 {
            return Err(MetricsError::invalid_rate("finance_rate", finance_rate));
        }
        if reinvest_rate <= -1.0 {
            return Err(MetricsError::invalid_rate("reinvest_rate", reinvest_rate));
        }
        Ok(Self {
            finance_rate,
            reinvest_rate,
        })
    }

    /// The discount rate applied to capital calls.
    #[must_use]
    pub fn finance_rate(&self) -> f64 {
        self.finance_rate
    }

    /// The reinvestment rate applied to distributions.
    #[must_use]
    pub fn reinvest_rate(&self) -> f64 {
        self.reinvest_rate
    }

    /// Aggregate rate over a merged schedule, rounded to six decimal
    /// places.
    ///
    /// Calls are discounted to the earliest date in the schedule,
    /// distributions compounded to the latest; zero amounts are
    /// ignored. Returns `None` when either side of the ledger is empty
    /// or the schedule spans no time.
    #[must_use]
    pub fn aggregate(&self, flows: &CashFlowSchedule) -> Option<Decimal> {
        let date0 = flows.iter().map(|cf| cf.date()).min()?;
        let date_n = flows.iter().map(|cf| cf.date()).max()?;

        let mut pv_calls = 0.0;
        let mut fv_distributions = 0.0;
        let mut has_call = false;
        let mut has_distribution = false;

        for cf in flows.iter() {
            let amount = cf.amount().to_f64().unwrap_or(0.0);
            if amount < 0.0 {
                has_call = true;
                let years = year_fraction(date0, cf.date());
                pv_calls += -amount * discount_factor(self.finance_rate, years);
            } else if amount > 0.0 {
                has_distribution = true;
                let years = year_fraction(cf.date(), date_n);
                fv_distributions += future_value(amount, self.reinvest_rate, years);
            }
        }

        if !has_call || !has_distribution {
            return None;
        }

        let total_years = year_fraction(date0, date_n);
        if total_years <= 0.0 || pv_calls <= 0.0 {
            return None;
        }

        let rate = (fv_distributions / pv_calls).powf(1.0 / total_years) - 1.0;
        if !rate.is_finite() {
            return None;
        }

        Decimal::from_f64(rate).map(|r| r.round_dp(RATE_PRECISION))
    }
}
