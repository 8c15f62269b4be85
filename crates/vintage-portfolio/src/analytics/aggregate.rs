//! Portfolio-level aggregation across vehicles.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vintage_core::types::{CashFlowSchedule, Date, VehicleStatus};
use vintage_metrics::mirr::ModifiedIrr;
use vintage_metrics::ratios::{self, MultipleCheck};

use super::parallel::maybe_parallel_map;
use super::snapshot::MetricsSnapshot;
use crate::flows::{vehicle_flows, TerminalValuation};
use crate::portfolio::Portfolio;
use crate::types::MetricsConfig;
use crate::vehicle::InvestmentVehicle;

/// Merges every vehicle's flows into one date-sorted schedule.
///
/// Each active vehicle's residual NAV is marked at the as-of date, so
/// the merged schedule values every vehicle at the same point in time.
fn merged_flows(vehicles: &[InvestmentVehicle], as_of: Date) -> CashFlowSchedule {
    let mut merged = CashFlowSchedule::new();
    for vehicle in vehicles {
        for cf in vehicle_flows(vehicle, TerminalValuation::AtDate(as_of)) {
            merged.push(cf);
        }
    }
    merged.sort_by_date();
    merged
}

/// Modified IRR across an arbitrary set of vehicles.
///
/// A straight XIRR over merged schedules is fragile: funds at opposite
/// ends of their lives produce sign patterns with multiple or no roots.
/// The modified IRR sidesteps root-finding entirely by discounting all
/// calls to the earliest date at `finance_rate` and compounding all
/// distributions (including as-of NAV marks) to the latest date at
/// `reinvest_rate`.
///
/// Returns `None` when the merged schedule lacks a call or a
/// distribution, spans zero time, or either rate is at or below -100%.
#[must_use]
pub fn aggregate_irr(
    vehicles: &[InvestmentVehicle],
    finance_rate: f64,
    reinvest_rate: f64,
    as_of: Date,
) -> Option<Decimal> {
    let calculator = match ModifiedIrr::new(finance_rate, reinvest_rate) {
        Ok(calculator) => calculator,
        Err(err) => {
            log::debug!("aggregate IRR rejected its rates: {err}");
            return None;
        }
    };
    calculator.aggregate(&merged_flows(vehicles, as_of))
}

/// Portfolio-level rollup with per-vehicle snapshots.
///
/// Totals sum the per-vehicle snapshots; the portfolio multiples are
/// recomputed from those totals rather than averaged across vehicles,
/// so a large fund moves the portfolio more than a small one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Name of the summarized portfolio.
    pub portfolio_name: String,

    /// The date residual NAVs were marked at.
    pub as_of: Date,

    /// Number of vehicles in the portfolio.
    pub vehicle_count: usize,

    /// Number of vehicles still active.
    pub active_count: usize,

    /// Total capital called across all vehicles.
    pub total_invested: Decimal,

    /// Total capital distributed across all vehicles.
    pub total_returned: Decimal,

    /// Total NAV of active vehicles.
    pub total_nav: Decimal,

    /// Portfolio TVPI from the totals, rounded to 4 dp.
    pub tvpi: Option<Decimal>,

    /// Portfolio DPI from the totals, rounded to 4 dp.
    pub dpi: Option<Decimal>,

    /// Portfolio RVPI from the totals, rounded to 4 dp.
    pub rvpi: Decimal,

    /// Modified IRR over the merged schedule, rounded to 6 dp.
    pub mirr: Option<Decimal>,

    /// Consistency check of the portfolio-level multiples.
    pub multiple_check: Option<MultipleCheck>,

    /// Per-vehicle snapshots, in portfolio order.
    pub snapshots: Vec<MetricsSnapshot>,
}

impl PortfolioSummary {
    /// Computes the summary for a portfolio at a point in time.
    ///
    /// Per-vehicle snapshots run through [`maybe_parallel_map`], so
    /// large portfolios fan out across threads when the `parallel`
    /// feature is enabled and the configuration allows it.
    #[must_use]
    pub fn compute(portfolio: &Portfolio, config: &MetricsConfig, as_of: Date) -> Self {
        let snapshots = maybe_parallel_map(&portfolio.vehicles, config, |vehicle| {
            MetricsSnapshot::compute_at(vehicle, as_of)
        });

        let total_invested: Decimal = snapshots.iter().map(|s| s.total_invested).sum();
        let total_returned: Decimal = snapshots.iter().map(|s| s.total_returned).sum();
        let total_nav: Decimal = snapshots
            .iter()
            .filter(|s| s.status.is_active())
            .map(|s| s.nav)
            .sum();

        // The pool as a whole is treated as active: closed vehicles
        // contribute realized flows, active ones their residual NAV.
        let tvpi = ratios::tvpi(
            total_invested,
            total_returned,
            total_nav,
            VehicleStatus::Active,
        );
        let dpi = ratios::dpi(total_invested, total_returned);
        let rvpi = ratios::rvpi(total_invested, total_nav, VehicleStatus::Active);
        let multiple_check = tvpi
            .zip(dpi)
            .map(|(tvpi, dpi)| MultipleCheck::evaluate(tvpi, dpi, rvpi));

        let mirr = aggregate_irr(
            &portfolio.vehicles,
            portfolio.finance_rate,
            portfolio.reinvest_rate,
            as_of,
        );

        Self {
            portfolio_name: portfolio.name.clone(),
            as_of,
            vehicle_count: portfolio.vehicles.len(),
            active_count: portfolio
                .vehicles
                .iter()
                .filter(|v| v.status.is_active())
                .count(),
            total_invested,
            total_returned,
            total_nav,
            tvpi,
            dpi,
            rvpi,
            mirr,
            multiple_check,
            snapshots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CashFlowRecord;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Active net investor: one call, NAV asserted well above cost.
    fn growth_fund() -> InvestmentVehicle {
        InvestmentVehicle::builder("Growth Fund")
            .add_record(CashFlowRecord::investment(date(2020, 1, 1), dec!(1_000_000)).unwrap())
            .add_record(CashFlowRecord::valuation_update(date(2022, 12, 31), dec!(1_200_000)))
            .build()
            .unwrap()
    }

    /// Closed net distributor: fully realized at a gain.
    fn harvested_fund() -> InvestmentVehicle {
        InvestmentVehicle::builder("Harvested Fund")
            .status(VehicleStatus::Closed)
            .add_record(CashFlowRecord::investment(date(2019, 1, 1), dec!(500_000)).unwrap())
            .add_record(CashFlowRecord::distribution(date(2021, 6, 30), dec!(900_000)).unwrap())
            .build()
            .unwrap()
    }

    fn two_fund_portfolio() -> Portfolio {
        Portfolio::builder("Two Funds")
            .add_vehicle(growth_fund())
            .add_vehicle(harvested_fund())
            .build()
            .unwrap()
    }

    #[test]
    fn test_aggregate_irr_known_value() {
        let vehicles = vec![growth_fund(), harvested_fund()];
        let mirr = aggregate_irr(&vehicles, 0.08, 0.06, date(2023, 6, 30));

        // Calls: 500,000 at t0 and 1,000,000 one year later, discounted
        // at 8%; distributions: 900,000 compounded two years at 6% plus
        // the 1,200,000 NAV marked at the as-of date.
        assert_eq!(mirr, Some(dec!(0.102505)));
    }

    #[test]
    fn test_aggregate_irr_requires_both_sides() {
        // A single closed vehicle with only calls never produces a
        // distribution side, and closed vehicles get no NAV mark.
        let vehicle = InvestmentVehicle::builder("Calls Only")
            .status(VehicleStatus::Closed)
            .add_record(CashFlowRecord::investment(date(2020, 1, 1), dec!(100_000)).unwrap())
            .build()
            .unwrap();

        assert_eq!(aggregate_irr(&[vehicle], 0.08, 0.06, date(2023, 1, 1)), None);
    }

    #[test]
    fn test_aggregate_irr_no_vehicles() {
        assert_eq!(aggregate_irr(&[], 0.08, 0.06, date(2023, 1, 1)), None);
    }

    #[test]
    fn test_aggregate_irr_invalid_rates() {
        let vehicles = vec![growth_fund()];
        assert_eq!(aggregate_irr(&vehicles, -1.5, 0.06, date(2023, 6, 30)), None);
        assert_eq!(aggregate_irr(&vehicles, 0.08, -1.0, date(2023, 6, 30)), None);
    }

    #[test]
    fn test_nav_marked_at_as_of_date() {
        // The same portfolio aggregated at two different dates: the
        // later mark stretches the horizon and dilutes the rate.
        let vehicles = vec![growth_fund(), harvested_fund()];
        let early = aggregate_irr(&vehicles, 0.08, 0.06, date(2023, 6, 30)).unwrap();
        let late = aggregate_irr(&vehicles, 0.08, 0.06, date(2026, 6, 30)).unwrap();

        assert!(late < early);
    }

    #[test]
    fn test_summary_totals_and_multiples() {
        let portfolio = two_fund_portfolio();
        let summary =
            PortfolioSummary::compute(&portfolio, &MetricsConfig::sequential(), date(2023, 6, 30));

        assert_eq!(summary.portfolio_name, "Two Funds");
        assert_eq!(summary.vehicle_count, 2);
        assert_eq!(summary.active_count, 1);
        assert_eq!(summary.total_invested, dec!(1_500_000));
        assert_eq!(summary.total_returned, dec!(900_000));
        assert_eq!(summary.total_nav, dec!(1_200_000.00));

        // From the totals: (900,000 + 1,200,000) / 1,500,000
        assert_eq!(summary.tvpi, Some(dec!(1.4000)));
        assert_eq!(summary.dpi, Some(dec!(0.6000)));
        assert_eq!(summary.rvpi, dec!(0.8000));
        assert_eq!(summary.mirr, Some(dec!(0.102505)));

        let check = summary.multiple_check.unwrap();
        assert!(check.holds);
        assert_eq!(check.difference, Decimal::ZERO);
    }

    #[test]
    fn test_summary_snapshots_in_portfolio_order() {
        let portfolio = two_fund_portfolio();
        let summary =
            PortfolioSummary::compute(&portfolio, &MetricsConfig::sequential(), date(2023, 6, 30));

        assert_eq!(summary.snapshots.len(), 2);
        assert_eq!(summary.snapshots[0].vehicle_id, "GROWTHFUND");
        assert_eq!(summary.snapshots[1].vehicle_id, "HARVESTEDFUND");
    }

    #[test]
    fn test_empty_portfolio_summary() {
        let portfolio = Portfolio::builder("Empty").build().unwrap();
        let summary =
            PortfolioSummary::compute(&portfolio, &MetricsConfig::sequential(), date(2023, 1, 1));

        assert_eq!(summary.vehicle_count, 0);
        assert_eq!(summary.total_invested, Decimal::ZERO);
        assert_eq!(summary.tvpi, None);
        assert_eq!(summary.dpi, None);
        assert_eq!(summary.rvpi, Decimal::ZERO);
        assert_eq!(summary.mirr, None);
        assert_eq!(summary.multiple_check, None);
        assert!(summary.snapshots.is_empty());
    }

    #[test]
    fn test_summary_serde_round_trip() {
        let portfolio = two_fund_portfolio();
        let summary =
            PortfolioSummary::compute(&portfolio, &MetricsConfig::sequential(), date(2023, 6, 30));

        let json = serde_json::to_string(&summary).unwrap();
        let parsed: PortfolioSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, summary);
    }
}
