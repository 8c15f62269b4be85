//! Per-vehicle metrics snapshots.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vintage_core::types::{CashFlow, Date, VehicleStatus};
use vintage_metrics::discount;
use vintage_metrics::ratios::{self, Moic, MultipleCheck, RvpiTier};
use vintage_metrics::xirr::xirr;

use crate::flows::{vehicle_flows, TerminalValuation};
use crate::vehicle::InvestmentVehicle;

/// The full set of performance metrics for one vehicle at a point in
/// time.
///
/// Everything here is derived from the vehicle's ledger in one pass;
/// the snapshot holds plain values and carries no reference back to the
/// vehicle. Metrics that cannot be computed (nothing invested, no sign
/// variety, missing target) are `None` rather than zero, so an absent
/// value can never be mistaken for a measured one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// The vehicle this snapshot describes.
    pub vehicle_id: String,

    /// Vehicle status at the time of the snapshot.
    pub status: VehicleStatus,

    /// Total capital called, in the reporting currency.
    pub total_invested: Decimal,

    /// Total capital distributed, in the reporting currency.
    pub total_returned: Decimal,

    /// Resolved NAV, rounded to 2 dp. Zero for closed vehicles.
    pub nav: Decimal,

    /// Annualized IRR over realized flows plus NAV, rounded to 6 dp.
    pub xirr: Option<Decimal>,

    /// Total value to paid-in, rounded to 4 dp.
    pub tvpi: Option<Decimal>,

    /// Distributions to paid-in, rounded to 4 dp.
    pub dpi: Option<Decimal>,

    /// Residual value to paid-in, rounded to 4 dp. Zero by convention
    /// when undefined.
    pub rvpi: Decimal,

    /// Reporting band for the RVPI value.
    pub rvpi_tier: RvpiTier,

    /// Multiple on invested capital, tagged with its provenance.
    pub moic: Option<Moic>,

    /// Net present value of the flows at the vehicle's target rate,
    /// rounded to 4 dp.
    pub xnpv: Option<Decimal>,

    /// Realized IRR minus target IRR, rounded to 4 dp.
    pub gap_to_target_irr: Option<Decimal>,

    /// Invested capital compounded at the target rate to the horizon,
    /// rounded to 2 dp.
    pub estimated_return: Option<Decimal>,

    /// Consistency check of the `TVPI = DPI + RVPI` identity.
    pub multiple_check: Option<MultipleCheck>,
}

impl MetricsSnapshot {
    /// Computes a snapshot as of today.
    #[must_use]
    pub fn compute(vehicle: &InvestmentVehicle) -> Self {
        Self::compute_at(vehicle, Date::today())
    }

    /// Computes a snapshot as of an explicit date.
    ///
    /// The date only matters where the ledger runs out: it is the
    /// fallback horizon for the estimated return when the vehicle has
    /// no end date (or, for a closed vehicle, no records). Every other
    /// metric is anchored to the ledger itself.
    #[must_use]
    pub fn compute_at(vehicle: &InvestmentVehicle, as_of: Date) -> Self {
        // Realized flows drive the totals; the anchored schedule adds
        // the NAV as a synthetic final inflow for the value metrics.
        let realized = vehicle_flows(vehicle, TerminalValuation::Omit);
        let anchored = vehicle_flows(vehicle, TerminalValuation::AtLastValuation);

        let total_invested: Decimal = realized
            .iter()
            .filter(|cf| cf.is_outflow())
            .map(|cf| -cf.amount())
            .sum();
        let total_returned: Decimal = realized
            .iter()
            .filter(|cf| cf.is_inflow())
            .map(CashFlow::amount)
            .sum();

        let status = vehicle.status;
        let nav = vehicle.nav();

        let xirr = xirr(&anchored);
        let dpi = ratios::dpi(total_invested, total_returned);
        let tvpi = ratios::tvpi(total_invested, total_returned, nav, status);
        let rvpi = ratios::rvpi(total_invested, nav, status);
        let rvpi_tier = RvpiTier::classify(rvpi);

        // A supplied multiple takes precedence over the derived one.
        let moic = match vehicle.provided_moic {
            Some(value) => Some(Moic::Provided(value)),
            None => ratios::moic(total_invested, total_returned, nav, status).map(Moic::Calculated),
        };

        let xnpv = vehicle.target_irr.and_then(|target| {
            let rate = target.to_f64()?;
            discount::xnpv(rate, &anchored)
                .and_then(Decimal::from_f64)
                .map(|value| value.round_dp(4))
        });

        let gap_to_target_irr = ratios::gap_to_target(xirr, vehicle.target_irr);

        let horizon = estimated_return_horizon(vehicle, as_of);
        let estimated_return = ratios::estimated_return(
            total_invested,
            vehicle.target_irr,
            vehicle.start_date,
            horizon,
        );

        let multiple_check = tvpi
            .zip(dpi)
            .map(|(tvpi, dpi)| MultipleCheck::evaluate(tvpi, dpi, rvpi));

        Self {
            vehicle_id: vehicle.id.clone(),
            status,
            total_invested,
            total_returned,
            nav,
            xirr,
            tvpi,
            dpi,
            rvpi,
            rvpi_tier,
            moic,
            xnpv,
            gap_to_target_irr,
            estimated_return,
            multiple_check,
        }
    }
}

/// Computes the metrics snapshot for a vehicle as of today.
///
/// Convenience wrapper around [`MetricsSnapshot::compute`].
#[must_use]
pub fn compute_metrics(vehicle: &InvestmentVehicle) -> MetricsSnapshot {
    MetricsSnapshot::compute(vehicle)
}

/// The date to which the estimated return should compound.
///
/// A closed vehicle stopped accruing at its last record; an active one
/// projects to its expected end of life. Either way the as-of date
/// stands in when the ledger gives no answer.
fn estimated_return_horizon(vehicle: &InvestmentVehicle, as_of: Date) -> Date {
    match vehicle.status {
        VehicleStatus::Closed => vehicle.last_record_date().unwrap_or(as_of),
        VehicleStatus::Active => vehicle.end_date.unwrap_or(as_of),
    }
}
