//! Portfolio builder for fluent construction.

use vintage_metrics::mirr::{DEFAULT_FINANCE_RATE, DEFAULT_REINVEST_RATE};

use crate::error::{PortfolioError, PortfolioResult};
use crate::portfolio::Portfolio;
use crate::vehicle::InvestmentVehicle;

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust,ignore
/// use vintage_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::new()
///     .name("Vintage 2019 Program")
///     .finance_rate(0.07)
///     .add_vehicle(fund_a)
///     .add_vehicle(fund_b)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct PortfolioBuilder {
    name: Option<String>,
    finance_rate: f64,
    reinvest_rate: f64,
    vehicles: Vec<InvestmentVehicle>,
}

impl Default for PortfolioBuilder {
    fn default() -> Self {
        Self {
            name: None,
            finance_rate: DEFAULT_FINANCE_RATE,
            reinvest_rate: DEFAULT_REINVEST_RATE,
            vehicles: Vec::new(),
        }
    }
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder with default rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the annual rate used to discount capital calls.
    #[must_use]
    pub fn finance_rate(mut self, rate: f64) -> Self {
        self.finance_rate = rate;
        self
    }

    /// Sets the annual rate used to compound distributions.
    #[must_use]
    pub fn reinvest_rate(mut self, rate: f64) -> Self {
        self.reinvest_rate = rate;
        self
    }

    /// Adds a vehicle to the portfolio.
    #[must_use]
    pub fn add_vehicle(mut self, vehicle: InvestmentVehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Adds multiple vehicles to the portfolio.
    #[must_use]
    pub fn add_vehicles(mut self, vehicles: impl IntoIterator<Item = InvestmentVehicle>) -> Self {
        self.vehicles.extend(vehicles);
        self
    }

    /// Sets all vehicles (replacing any existing).
    #[must_use]
    pub fn vehicles(mut self, vehicles: Vec<InvestmentVehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing, either rate is at or
    /// below -100%, or two vehicles share an ID.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self
            .name
            .ok_or_else(|| PortfolioError::missing_field("name"))?;

        if self.finance_rate <= -1.0 {
            return Err(PortfolioError::invalid_rate(
                "finance_rate",
                self.finance_rate,
            ));
        }
        if self.reinvest_rate <= -1.0 {
            return Err(PortfolioError::invalid_rate(
                "reinvest_rate",
                self.reinvest_rate,
            ));
        }

        for (index, vehicle) in self.vehicles.iter().enumerate() {
            let duplicate = self.vehicles[..index]
                .iter()
                .any(|earlier| earlier.id == vehicle.id);
            if duplicate {
                return Err(PortfolioError::invalid_vehicle(
                    vehicle.id.clone(),
                    "duplicate vehicle id",
                ));
            }
        }

        Ok(Portfolio {
            name,
            finance_rate: self.finance_rate,
            reinvest_rate: self.reinvest_rate,
            vehicles: self.vehicles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_vehicle(id: &str) -> InvestmentVehicle {
        InvestmentVehicle::builder(format!("Fund {id}"))
            .id(id)
            .build()
            .unwrap()
    }

    #[test]
    fn test_basic_build() {
        let portfolio = PortfolioBuilder::new().name("Test Portfolio").build().unwrap();

        assert_eq!(portfolio.name, "Test Portfolio");
        assert!((portfolio.finance_rate - 0.08).abs() < 1e-12);
        assert!((portfolio.reinvest_rate - 0.06).abs() < 1e-12);
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_custom_rates() {
        let portfolio = PortfolioBuilder::new()
            .name("Custom Rates")
            .finance_rate(0.10)
            .reinvest_rate(0.04)
            .build()
            .unwrap();

        assert!((portfolio.finance_rate - 0.10).abs() < 1e-12);
        assert!((portfolio.reinvest_rate - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_missing_name() {
        let result = PortfolioBuilder::new().build();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn test_rejects_rates_at_or_below_floor() {
        let result = PortfolioBuilder::new().name("Bad").finance_rate(-1.0).build();
        assert!(matches!(
            result,
            Err(PortfolioError::InvalidRate {
                name: "finance_rate",
                ..
            })
        ));

        let result = PortfolioBuilder::new().name("Bad").reinvest_rate(-1.5).build();
        assert!(matches!(
            result,
            Err(PortfolioError::InvalidRate {
                name: "reinvest_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_rates_above_floor_allowed() {
        let portfolio = PortfolioBuilder::new()
            .name("Deflationary")
            .finance_rate(-0.02)
            .build()
            .unwrap();

        assert!((portfolio.finance_rate + 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_add_vehicles_batch() {
        let portfolio = PortfolioBuilder::new()
            .name("Batch")
            .add_vehicles(vec![
                create_test_vehicle("A"),
                create_test_vehicle("B"),
                create_test_vehicle("C"),
            ])
            .build()
            .unwrap();

        assert_eq!(portfolio.vehicle_count(), 3);
    }

    #[test]
    fn test_duplicate_vehicle_ids_rejected() {
        let result = PortfolioBuilder::new()
            .name("Dupes")
            .add_vehicle(create_test_vehicle("FUND1"))
            .add_vehicle(create_test_vehicle("FUND1"))
            .build();

        assert!(matches!(
            result,
            Err(PortfolioError::InvalidVehicle { .. })
        ));
    }
}
