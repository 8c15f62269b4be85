//! Portfolio struct and core methods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vintage_core::types::Date;

use crate::analytics::{self, PortfolioSummary};
use crate::types::MetricsConfig;
use crate::vehicle::InvestmentVehicle;

/// A collection of investment vehicles aggregated under shared rates.
///
/// The finance and reinvestment rates parameterize the portfolio's
/// modified IRR: what it costs to fund capital calls and what interim
/// distributions earn until the final date. They belong to the
/// portfolio, not to any one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Portfolio name.
    pub name: String,

    /// Annual rate applied to discount capital calls (0.08 = 8%).
    pub finance_rate: f64,

    /// Annual rate applied to compound distributions (0.06 = 6%).
    pub reinvest_rate: f64,

    /// The vehicles in the portfolio.
    pub vehicles: Vec<InvestmentVehicle>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    /// Returns the number of vehicles.
    #[must_use]
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns true if the portfolio has no vehicles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Returns the number of active vehicles.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.status.is_active()).count()
    }

    /// Finds a vehicle by its ID.
    #[must_use]
    pub fn find_vehicle(&self, id: &str) -> Option<&InvestmentVehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Modified IRR across all vehicles, with NAVs marked today.
    #[must_use]
    pub fn aggregate_irr(&self) -> Option<Decimal> {
        self.aggregate_irr_at(Date::today())
    }

    /// Modified IRR across all vehicles, with NAVs marked at `as_of`.
    #[must_use]
    pub fn aggregate_irr_at(&self, as_of: Date) -> Option<Decimal> {
        analytics::aggregate_irr(&self.vehicles, self.finance_rate, self.reinvest_rate, as_of)
    }

    /// Full portfolio summary as of today.
    #[must_use]
    pub fn summary(&self, config: &MetricsConfig) -> PortfolioSummary {
        self.summary_at(config, Date::today())
    }

    /// Full portfolio summary at an explicit date.
    #[must_use]
    pub fn summary_at(&self, config: &MetricsConfig, as_of: Date) -> PortfolioSummary {
        PortfolioSummary::compute(self, config, as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CashFlowRecord;
    use rust_decimal_macros::dec;
    use vintage_core::types::VehicleStatus;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn create_test_portfolio() -> Portfolio {
        let active = InvestmentVehicle::builder("Active Fund")
            .id("ACT1")
            .add_record(CashFlowRecord::investment(date(2020, 1, 1), dec!(1_000_000)).unwrap())
            .add_record(CashFlowRecord::valuation_update(date(2022, 12, 31), dec!(1_200_000)))
            .build()
            .unwrap();

        let closed = InvestmentVehicle::builder("Closed Fund")
            .id("CLS1")
            .status(VehicleStatus::Closed)
            .add_record(CashFlowRecord::investment(date(2019, 1, 1), dec!(500_000)).unwrap())
            .add_record(CashFlowRecord::distribution(date(2021, 6, 30), dec!(900_000)).unwrap())
            .build()
            .unwrap();

        Portfolio::builder("Test Portfolio")
            .add_vehicle(active)
            .add_vehicle(closed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_vehicle_counts() {
        let portfolio = create_test_portfolio();
        assert_eq!(portfolio.vehicle_count(), 2);
        assert_eq!(portfolio.active_count(), 1);
        assert!(!portfolio.is_empty());
    }

    #[test]
    fn test_default_rates() {
        let portfolio = create_test_portfolio();
        assert!((portfolio.finance_rate - 0.08).abs() < 1e-12);
        assert!((portfolio.reinvest_rate - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_find_vehicle() {
        let portfolio = create_test_portfolio();

        assert_eq!(portfolio.find_vehicle("ACT1").map(|v| v.name.as_str()), Some("Active Fund"));
        assert!(portfolio.find_vehicle("MISSING").is_none());
    }

    #[test]
    fn test_aggregate_irr_at() {
        let portfolio = create_test_portfolio();
        let mirr = portfolio.aggregate_irr_at(date(2023, 6, 30));

        assert_eq!(mirr, Some(dec!(0.102505)));
    }

    #[test]
    fn test_summary_at_delegates() {
        let portfolio = create_test_portfolio();
        let config = MetricsConfig::sequential();

        let summary = portfolio.summary_at(&config, date(2023, 6, 30));
        assert_eq!(summary.portfolio_name, "Test Portfolio");
        assert_eq!(summary.vehicle_count, 2);
        assert_eq!(summary.mirr, Some(dec!(0.102505)));
    }

    #[test]
    fn test_serde_round_trip() {
        let portfolio = create_test_portfolio();

        let json = serde_json::to_string(&portfolio).unwrap();
        let parsed: Portfolio = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, portfolio);
    }
}
