//! Vehicle builder for fluent construction.

use rust_decimal::Decimal;
use vintage_core::types::{Currency, Date, VehicleStatus};

use super::InvestmentVehicle;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::CashFlowRecord;

/// Builder for constructing an [`InvestmentVehicle`].
///
/// # Example
///
/// ```rust,ignore
/// use vintage_portfolio::prelude::*;
///
/// let vehicle = VehicleBuilder::new()
///     .name("Growth Fund III")
///     .currency(Currency::EUR)
///     .start_date(Date::from_ymd(2019, 6, 1)?)
///     .target_irr(dec!(0.15))
///     .add_record(CashFlowRecord::investment(call_date, dec!(1_000_000))?)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct VehicleBuilder {
    id: Option<String>,
    name: Option<String>,
    status: VehicleStatus,
    currency: Currency,
    start_date: Option<Date>,
    end_date: Option<Date>,
    target_irr: Option<Decimal>,
    provided_moic: Option<Decimal>,
    records: Vec<CashFlowRecord>,
}

impl VehicleBuilder {
    /// Creates a new vehicle builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vehicle ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the vehicle name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the vehicle status.
    #[must_use]
    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the vehicle's local currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the start of the investment period.
    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the end of the vehicle's life.
    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the target IRR as a decimal fraction (0.15 = 15%).
    #[must_use]
    pub fn target_irr(mut self, rate: Decimal) -> Self {
        self.target_irr = Some(rate);
        self
    }

    /// Sets a MOIC supplied by the reporting source.
    #[must_use]
    pub fn provided_moic(mut self, moic: Decimal) -> Self {
        self.provided_moic = Some(moic);
        self
    }

    /// Adds a record to the ledger.
    #[must_use]
    pub fn add_record(mut self, record: CashFlowRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Adds multiple records to the ledger.
    #[must_use]
    pub fn add_records(mut self, records: impl IntoIterator<Item = CashFlowRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Sets the full ledger (replacing any existing records).
    #[must_use]
    pub fn records(mut self, records: Vec<CashFlowRecord>) -> Self {
        self.records = records;
        self
    }

    /// Builds the vehicle.
    ///
    /// The ledger is sorted by date and running balances are derived as
    /// part of construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing.
    pub fn build(self) -> PortfolioResult<InvestmentVehicle> {
        let name = self
            .name
            .ok_or_else(|| PortfolioError::missing_field("name"))?;

        // Generate ID from name if not provided
        let id = self.id.unwrap_or_else(|| {
            name.chars()
                .filter(|c| c.is_alphanumeric())
                .take(20)
                .collect::<String>()
                .to_uppercase()
        });

        Ok(InvestmentVehicle::from_parts(
            id,
            name,
            self.status,
            self.currency,
            self.start_date,
            self.end_date,
            self.target_irr,
            self.provided_moic,
            self.records,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_basic_build() {
        let vehicle = VehicleBuilder::new()
            .id("FUND1")
            .name("Growth Fund III")
            .build()
            .unwrap();

        assert_eq!(vehicle.id, "FUND1");
        assert_eq!(vehicle.name, "Growth Fund III");
        assert_eq!(vehicle.status, VehicleStatus::Active);
        assert_eq!(vehicle.currency, Currency::USD);
        assert_eq!(vehicle.record_count(), 0);
    }

    #[test]
    fn test_missing_name() {
        let result = VehicleBuilder::new().id("FUND1").build();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn test_auto_generated_id() {
        let vehicle = VehicleBuilder::new()
            .name("Growth Fund III 2019")
            .build()
            .unwrap();

        // ID should be alphanumeric, uppercase, max 20 chars
        assert_eq!(vehicle.id, "GROWTHFUNDIII2019");
    }

    #[test]
    fn test_full_metadata() {
        let vehicle = VehicleBuilder::new()
            .name("Euro Buyout IV")
            .status(VehicleStatus::Closed)
            .currency(Currency::EUR)
            .start_date(date(2015, 3, 1))
            .end_date(date(2023, 3, 1))
            .target_irr(dec!(0.18))
            .provided_moic(dec!(2.1))
            .build()
            .unwrap();

        assert_eq!(vehicle.status, VehicleStatus::Closed);
        assert_eq!(vehicle.currency, Currency::EUR);
        assert_eq!(vehicle.start_date, Some(date(2015, 3, 1)));
        assert_eq!(vehicle.end_date, Some(date(2023, 3, 1)));
        assert_eq!(vehicle.target_irr, Some(dec!(0.18)));
        assert_eq!(vehicle.provided_moic, Some(dec!(2.1)));
    }

    #[test]
    fn test_records_sorted_and_balanced() {
        let vehicle = VehicleBuilder::new()
            .name("Test")
            .add_record(CashFlowRecord::distribution(date(2022, 1, 1), dec!(250_000)).unwrap())
            .add_record(CashFlowRecord::investment(date(2020, 1, 1), dec!(1_000_000)).unwrap())
            .build()
            .unwrap();

        assert_eq!(vehicle.records()[0].date(), date(2020, 1, 1));
        assert_eq!(vehicle.records()[1].running_balance(), dec!(750_000));
    }

    #[test]
    fn test_add_records_batch() {
        let records = vec![
            CashFlowRecord::investment(date(2020, 1, 1), dec!(500_000)).unwrap(),
            CashFlowRecord::investment(date(2020, 7, 1), dec!(500_000)).unwrap(),
            CashFlowRecord::distribution(date(2022, 1, 1), dec!(200_000)).unwrap(),
        ];

        let vehicle = VehicleBuilder::new()
            .name("Test")
            .add_records(records)
            .build()
            .unwrap();

        assert_eq!(vehicle.record_count(), 3);
    }
}
