//! Conversion of transaction ledgers into discountable flow schedules.
//!
//! Metrics operate on signed cash flows in the reporting currency:
//! capital calls are outflows, distributions are inflows, and the
//! vehicle's unrealized NAV may be appended as a synthetic final inflow.
//! How that terminal flow is dated is a policy choice, captured by
//! [`TerminalValuation`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vintage_core::types::{CashFlow, CashFlowSchedule, Date};

use crate::types::{CashFlowRecord, RecordKind};
use crate::vehicle::InvestmentVehicle;

/// How to represent a vehicle's unrealized value in its flow schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalValuation {
    /// Realized flows only. Used for totals and DPI-style measures.
    Omit,
    /// Append the NAV at the date it was last observed. Used for
    /// per-vehicle metrics, where the schedule should end where the
    /// vehicle's own records end.
    AtLastValuation,
    /// Append the NAV at an explicit date. Used for portfolio views,
    /// where every vehicle's residual value must be marked at the same
    /// point in time.
    AtDate(Date),
}

/// Builds the signed flow schedule for a vehicle.
///
/// Investments become outflows and distributions become inflows, both
/// converted to the reporting currency. Valuation updates move no cash
/// and contribute nothing directly; they only influence the terminal
/// flow through NAV resolution.
///
/// Closed vehicles never receive a terminal flow regardless of policy:
/// their value is fully realized, so the ledger already tells the whole
/// story. The result is sorted ascending by date with same-date flows in
/// insertion order.
#[must_use]
pub fn vehicle_flows(vehicle: &InvestmentVehicle, terminal: TerminalValuation) -> CashFlowSchedule {
    let mut schedule = CashFlowSchedule::with_capacity(vehicle.record_count() + 1);

    for record in vehicle.records() {
        match record.kind() {
            RecordKind::Investment => {
                schedule.push(CashFlow::outflow(record.date(), record.investment_base()));
            }
            RecordKind::Distribution => {
                schedule.push(CashFlow::inflow(record.date(), record.distribution_base()));
            }
            RecordKind::ValuationUpdate => {}
        }
    }

    if vehicle.status.is_active() {
        let nav = vehicle.nav();
        match terminal {
            TerminalValuation::Omit => {}
            TerminalValuation::AtLastValuation => {
                if !nav.is_zero() {
                    if let Some(anchor) = last_observation_date(vehicle) {
                        schedule.push(CashFlow::inflow(anchor, nav));
                    }
                }
            }
            TerminalValuation::AtDate(date) => {
                if nav > Decimal::ZERO {
                    schedule.push(CashFlow::inflow(date, nav));
                }
            }
        }
    }

    schedule.sort_by_date();
    schedule
}

/// The date where the vehicle's value was last observed.
///
/// Prefers the most recent record that asserted a non-zero valuation;
/// when no record ever did, the most recent record of any kind stands
/// in. An empty ledger has no observation date at all.
fn last_observation_date(vehicle: &InvestmentVehicle) -> Option<Date> {
    vehicle
        .records()
        .iter()
        .rev()
        .find(|r| r.valuation().is_some_and(|v| !v.is_zero()))
        .or_else(|| vehicle.records().last())
        .map(CashFlowRecord::date)
}
