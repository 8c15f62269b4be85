//! Discounted cash flow primitives.
//!
//! Present value, future value, and XNPV on an ACT/365F basis. These
//! are the building blocks for the rate solvers in [`crate::xirr`] and
//! [`crate::mirr`]; they work in `f64` and leave rounding to callers.

use rust_decimal::prelude::ToPrimitive;

use vintage_core::daycounts::{Act365Fixed, DayCount};
use vintage_core::types::{CashFlowSchedule, Date};

/// Day count basis used for every fund metric.
const DAY_COUNT: Act365Fixed = Act365Fixed;

/// Year fraction between two dates on the metrics day basis.
///
/// Negative when `end` precedes `start`.
#[must_use]
pub fn year_fraction(start: Date, end: Date) -> f64 {
    DAY_COUNT.day_count(start, end) as f64 / 365.0
}

/// Discount factor for an annually compounded rate over a year fraction.
#[must_use]
pub fn discount_factor(rate: f64, years: f64) -> f64 {
    (1.0 + rate).powf(-years)
}

/// Future value of an amount compounded annually over a year fraction.
#[must_use]
pub fn future_value(amount: f64, rate: f64, years: f64) -> f64 {
    amount * (1.0 + rate).powf(years)
}

/// Net present value of dated flows at an annually compounded rate.
///
/// Every flow is discounted to the earliest date in the schedule. A
/// zero rate short-circuits to the plain sum of amounts so that the
/// common reporting case carries no float drift.
///
/// Returns `None` for an empty schedule, or when any term fails to
/// evaluate to a finite number (a rate at or below -100%, or
/// overflow).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use vintage_core::types::{CashFlow, CashFlowSchedule, Date};
/// use vintage_metrics::discount::xnpv;
///
/// let mut flows = CashFlowSchedule::new();
/// flows.push(CashFlow::new(Date::from_ymd(2021, 1, 1).unwrap(), dec!(-1000)));
/// flows.push(CashFlow::new(Date::from_ymd(2022, 1, 1).unwrap(), dec!(1100)));
///
/// let npv = xnpv(0.10, &flows).unwrap();
/// assert!(npv.abs() < 0.01);
/// ```
#[must_use]
pub fn xnpv(rate: f64, flows: &CashFlowSchedule) -> Option<f64> {
    let date0 = flows.iter().map(|cf| cf.date()).min()?;

    if rate == 0.0 {
        return flows.total().to_f64();
    }

    let mut pv = 0.0;
    for cf in flows.iter() {
        let years = year_fraction(date0, cf.date());
        let amount = cf.amount().to_f64().unwrap_or(0.0);
        pv += amount * discount_factor(rate, years);
    }

    pv.is_finite().then_some(pv)
}
