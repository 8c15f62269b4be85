//! Signed cash flow types for fund analytics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A dated, signed cash flow in base currency.
///
/// Sign convention follows the investor's pocket: capital paid into a
/// vehicle is negative, capital returned (and any terminal residual
/// value) is positive.
///
/// # Example
///
/// ```rust
/// use vintage_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::outflow(Date::from_ymd(2020, 1, 15).unwrap(), dec!(250000));
/// assert_eq!(cf.amount(), dec!(-250000));
/// assert!(cf.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Flow date
    date: Date,
    /// Signed amount in base currency
    amount: Decimal,
}

impl CashFlow {
    /// Creates a cash flow with an explicitly signed amount.
    #[must_use]
    pub fn new(date: Date, amount: Decimal) -> Self {
        Self { date, amount }
    }

    /// Creates an investor outflow (capital call); stored negative.
    #[must_use]
    pub fn outflow(date: Date, amount: Decimal) -> Self {
        Self::new(date, -amount.abs())
    }

    /// Creates an investor inflow (distribution or residual value); stored positive.
    #[must_use]
    pub fn inflow(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount.abs())
    }

    /// Returns the flow date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true for a strictly negative amount.
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true for a strictly positive amount.
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.amount)
    }
}

/// A date-ordered sequence of signed cash flows.
///
/// Keeps flows sorted ascending by date with ties left in insertion
/// order, which is what discounting and rate solving assume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    /// Ordered list of cash flows
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates a new empty cash flow schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a cash flow to the schedule.
    pub fn push(&mut self, cf: CashFlow) {
        self.cash_flows.push(cf);
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the net total of all flows.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Returns the earliest flow date, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.cash_flows.first().map(CashFlow::date)
    }

    /// Returns the latest flow date, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.cash_flows.last().map(CashFlow::date)
    }

    /// Returns true if the schedule contains at least one outflow and
    /// at least one inflow.
    ///
    /// A rate solver can only bracket a root when both signs are
    /// present; callers check this before attempting an IRR.
    #[must_use]
    pub fn has_sign_variety(&self) -> bool {
        let mut has_negative = false;
        let mut has_positive = false;
        for cf in &self.cash_flows {
            if cf.is_outflow() {
                has_negative = true;
            } else if cf.is_inflow() {
                has_positive = true;
            }
            if has_negative && has_positive {
                return true;
            }
        }
        false
    }

    /// Sorts cash flows ascending by date, preserving insertion order
    /// among equal dates.
    pub fn sort_by_date(&mut self) {
        self.cash_flows.sort_by_key(|cf| cf.date);
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}
