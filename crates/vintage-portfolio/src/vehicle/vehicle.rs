//! Investment vehicle struct and core methods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vintage_core::types::{Currency, Date, VehicleStatus};

use super::balance::rederive_running_balances;
use crate::types::CashFlowRecord;

/// A single fund, SPV, or deal with its transaction ledger.
///
/// The ledger is kept sorted by date (ties in insertion order) and every
/// record's running balance is rederived on mutation, so the chain is
/// always consistent with the record set. Metadata fields are plain and
/// public; the ledger itself only changes through [`add_record`] and
/// [`set_records`].
///
/// [`add_record`]: Self::add_record
/// [`set_records`]: Self::set_records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentVehicle {
    /// Unique identifier for the vehicle.
    pub id: String,

    /// Vehicle name.
    pub name: String,

    /// Whether the vehicle is still holding value.
    pub status: VehicleStatus,

    /// Local currency of the vehicle's ledger.
    pub currency: Currency,

    /// Date the investment period began.
    pub start_date: Option<Date>,

    /// Expected or actual end of the vehicle's life.
    pub end_date: Option<Date>,

    /// Target IRR as a decimal fraction (0.15 = 15%).
    pub target_irr: Option<Decimal>,

    /// MOIC supplied by the reporting source, if any.
    pub provided_moic: Option<Decimal>,

    records: Vec<CashFlowRecord>,
}

impl InvestmentVehicle {
    /// Creates a new vehicle builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::VehicleBuilder {
        super::VehicleBuilder::new().name(name)
    }

    /// The transaction ledger, sorted ascending by date.
    #[must_use]
    pub fn records(&self) -> &[CashFlowRecord] {
        &self.records
    }

    /// Returns the number of records in the ledger.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// The date of the most recent record, if any.
    #[must_use]
    pub fn last_record_date(&self) -> Option<Date> {
        self.records.last().map(CashFlowRecord::date)
    }

    /// Appends a record, keeping the ledger sorted and balances current.
    ///
    /// Back-dated records are allowed; the whole balance chain is
    /// rederived after the insert.
    pub fn add_record(&mut self, record: CashFlowRecord) {
        self.records.push(record);
        self.normalize_records();
    }

    /// Replaces the entire ledger.
    pub fn set_records(&mut self, records: Vec<CashFlowRecord>) {
        self.records = records;
        self.normalize_records();
    }

    /// Resolves the vehicle's NAV in the reporting currency, rounded to
    /// 2 dp.
    ///
    /// A closed vehicle has no residual value and always reports zero.
    /// Otherwise the most recent asserted valuation wins; failing that,
    /// the running balance of the last record stands in as a cost-basis
    /// proxy. A vehicle with no records reports zero.
    #[must_use]
    pub fn nav(&self) -> Decimal {
        if self.status.is_closed() {
            return Decimal::ZERO;
        }
        if let Some(valuation) = self.records.iter().rev().find_map(|r| r.valuation_base()) {
            return valuation.round_dp(2);
        }
        match self.records.last() {
            Some(last) => last.running_balance_base().round_dp(2),
            None => Decimal::ZERO,
        }
    }

    pub(crate) fn from_parts(
        id: String,
        name: String,
        status: VehicleStatus,
        currency: Currency,
        start_date: Option<Date>,
        end_date: Option<Date>,
        target_irr: Option<Decimal>,
        provided_moic: Option<Decimal>,
        records: Vec<CashFlowRecord>,
    ) -> Self {
        let mut vehicle = Self {
            id,
            name,
            status,
            currency,
            start_date,
            end_date,
            target_irr,
            provided_moic,
            records,
        };
        vehicle.normalize_records();
        vehicle
    }

    fn normalize_records(&mut self) {
        // Stable sort: same-date records keep their insertion order.
        self.records.sort_by_key(CashFlowRecord::date);
        rederive_running_balances(&mut self.records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn active_vehicle(records: Vec<CashFlowRecord>) -> InvestmentVehicle {
        InvestmentVehicle::builder("Test Fund")
            .records(records)
            .build()
            .unwrap()
    }

    #[test]
    fn test_records_sorted_on_build() {
        let vehicle = active_vehicle(vec![
            CashFlowRecord::distribution(date(2022, 6, 30), dec!(300_000)).unwrap(),
            CashFlowRecord::investment(date(2020, 1, 1), dec!(1_000_000)).unwrap(),
        ]);

        assert_eq!(vehicle.records()[0].date(), date(2020, 1, 1));
        assert_eq!(vehicle.records()[1].date(), date(2022, 6, 30));
        assert_eq!(vehicle.records()[1].running_balance(), dec!(700_000));
    }

    #[test]
    fn test_add_record_rederives_balances() {
        let mut vehicle = active_vehicle(vec![
            CashFlowRecord::investment(date(2020, 1, 1), dec!(1_000_000)).unwrap(),
            CashFlowRecord::distribution(date(2022, 1, 1), dec!(400_000)).unwrap(),
        ]);

        // Back-dated call lands between the two existing records and
        // shifts every balance after it.
        vehicle.add_record(CashFlowRecord::investment(date(2021, 1, 1), dec!(500_000)).unwrap());

        assert_eq!(vehicle.record_count(), 3);
        assert_eq!(vehicle.records()[1].date(), date(2021, 1, 1));
        assert_eq!(vehicle.records()[1].running_balance(), dec!(1_500_000));
        assert_eq!(vehicle.records()[2].running_balance(), dec!(1_100_000));
    }

    #[test]
    fn test_same_date_records_keep_insertion_order() {
        let mut vehicle = active_vehicle(vec![]);
        vehicle.add_record(CashFlowRecord::investment(date(2020, 1, 1), dec!(100)).unwrap());
        vehicle.add_record(CashFlowRecord::distribution(date(2020, 1, 1), dec!(40)).unwrap());

        assert_eq!(vehicle.records()[0].kind().to_string(), "Investment");
        assert_eq!(vehicle.records()[1].running_balance(), dec!(60));
    }

    #[test]
    fn test_nav_prefers_latest_valuation() {
        let vehicle = active_vehicle(vec![
            CashFlowRecord::investment(date(2020, 1, 1), dec!(1_000_000)).unwrap(),
            CashFlowRecord::valuation_update(date(2021, 12, 31), dec!(1_200_000)),
            CashFlowRecord::valuation_update(date(2022, 12, 31), dec!(1_350_000)),
        ]);

        assert_eq!(vehicle.nav(), dec!(1_350_000.00));
    }

    #[test]
    fn test_nav_applies_fx() {
        let vehicle = active_vehicle(vec![
            CashFlowRecord::investment(date(2020, 1, 1), dec!(500_000)).unwrap(),
            CashFlowRecord::valuation_update(date(2022, 12, 31), dec!(600_000))
                .with_fx_rate(dec!(1.1))
                .unwrap(),
        ]);

        assert_eq!(vehicle.nav(), dec!(660_000.00));
    }

    #[test]
    fn test_nav_falls_back_to_running_balance() {
        let vehicle = active_vehicle(vec![
            CashFlowRecord::investment(date(2020, 1, 1), dec!(800_000)).unwrap(),
            CashFlowRecord::distribution(date(2021, 6, 30), dec!(150_000)).unwrap(),
        ]);

        // No valuation was ever asserted: cost basis stands in.
        assert_eq!(vehicle.nav(), dec!(650_000.00));
    }

    #[test]
    fn test_nav_ties_resolved_by_insertion_order() {
        let mut vehicle = active_vehicle(vec![]);
        vehicle.add_record(CashFlowRecord::investment(date(2020, 1, 1), dec!(100_000)).unwrap());
        vehicle.add_record(CashFlowRecord::valuation_update(date(2021, 1, 1), dec!(110_000)));
        vehicle.add_record(CashFlowRecord::valuation_update(date(2021, 1, 1), dec!(125_000)));

        // Two valuations on the same date: the later insert wins.
        assert_eq!(vehicle.nav(), dec!(125_000.00));
    }

    #[test]
    fn test_closed_vehicle_nav_is_zero() {
        let vehicle = InvestmentVehicle::builder("Wound Down")
            .status(VehicleStatus::Closed)
            .add_record(CashFlowRecord::investment(date(2015, 1, 1), dec!(1_000_000)).unwrap())
            .add_record(CashFlowRecord::valuation_update(date(2020, 1, 1), dec!(2_000_000)))
            .build()
            .unwrap();

        assert_eq!(vehicle.nav(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_vehicle_nav_is_zero() {
        let vehicle = active_vehicle(vec![]);
        assert_eq!(vehicle.nav(), Decimal::ZERO);
        assert_eq!(vehicle.last_record_date(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let vehicle = active_vehicle(vec![
            CashFlowRecord::investment(date(2020, 1, 1), dec!(1_000_000)).unwrap(),
            CashFlowRecord::valuation_update(date(2022, 12, 31), dec!(1_250_000)),
        ]);

        let json = serde_json::to_string(&vehicle).unwrap();
        let parsed: InvestmentVehicle = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, vehicle);
        assert_eq!(parsed.nav(), dec!(1_250_000.00));
    }
}
