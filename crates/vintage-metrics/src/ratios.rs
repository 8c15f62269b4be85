//! Capital multiples and target-rate comparisons.
//!
//! The ratio family (TVPI, DPI, RVPI, MOIC) relates capital returned
//! and capital still at work to capital invested. Inputs are
//! base-currency `Decimal` totals; an undefined ratio is `None`, never
//! a sentinel value. Results are rounded to [`RATIO_PRECISION`] places
//! unless noted.

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use vintage_core::types::{Date, VehicleStatus};

use crate::discount::{future_value, year_fraction};

/// Decimal places reported for capital ratios.
pub const RATIO_PRECISION: u32 = 4;

/// Distributions to paid-in: `returned / invested`.
///
/// `None` when nothing has been invested.
#[must_use]
pub fn dpi(invested: Decimal, returned: Decimal) -> Option<Decimal> {
    if invested <= Decimal::ZERO {
        return None;
    }
    Some((returned / invested).round_dp(RATIO_PRECISION))
}

/// Total value to paid-in: `(returned + nav) / invested`.
///
/// A closed vehicle carries no residual value, so its NAV is forced to
/// zero and TVPI collapses to DPI. `None` when nothing has been
/// invested.
#[must_use]
pub fn tvpi(
    invested: Decimal,
    returned: Decimal,
    nav: Decimal,
    status: VehicleStatus,
) -> Option<Decimal> {
    if invested <= Decimal::ZERO {
        return None;
    }
    let residual = if status.is_closed() { Decimal::ZERO } else { nav };
    Some(((returned + residual) / invested).round_dp(RATIO_PRECISION))
}

/// Residual value to paid-in: `nav / invested`.
///
/// Total by convention: a closed vehicle or one with no invested
/// capital reports zero residual weight rather than an absence.
#[must_use]
pub fn rvpi(invested: Decimal, nav: Decimal, status: VehicleStatus) -> Decimal {
    if status.is_closed() || invested <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (nav / invested).round_dp(RATIO_PRECISION)
}

/// Multiple on invested capital, unrounded.
///
/// Same formula as [`tvpi`] but kept at full precision so it can serve
/// as a cross-check against the rounded reporting ratios.
#[must_use]
pub fn moic(
    invested: Decimal,
    returned: Decimal,
    nav: Decimal,
    status: VehicleStatus,
) -> Option<Decimal> {
    if invested <= Decimal::ZERO {
        return None;
    }
    let residual = if status.is_closed() { Decimal::ZERO } else { nav };
    Some((returned + residual) / invested)
}

/// Distance of realized performance from the target rate.
///
/// `xirr - target_irr`, rounded to 4 dp. `None` when either operand is
/// absent.
#[must_use]
pub fn gap_to_target(xirr: Option<Decimal>, target_irr: Option<Decimal>) -> Option<Decimal> {
    let gap = xirr? - target_irr?;
    Some(gap.round_dp(RATIO_PRECISION))
}

/// Projected value of invested capital compounded at the target rate.
///
/// `invested × (1 + target_irr)^years` over act/365 years from
/// `start_date` to `horizon`, rounded to 2 dp. `None` when nothing has
/// been invested, the target rate is absent or non-positive, the start
/// date is absent, or the horizon does not lie after the start.
#[must_use]
pub fn estimated_return(
    invested: Decimal,
    target_irr: Option<Decimal>,
    start_date: Option<Date>,
    horizon: Date,
) -> Option<Decimal> {
    let target = target_irr?;
    let start = start_date?;
    if invested <= Decimal::ZERO || target <= Decimal::ZERO || horizon <= start {
        return None;
    }

    let years = year_fraction(start, horizon);
    let projected = future_value(invested.to_f64()?, target.to_f64()?, years);
    Decimal::from_f64(projected).map(|value| value.round_dp(2))
}

/// MOIC tagged with its provenance.
///
/// Reporting teams sometimes supply a multiple directly; a supplied
/// value takes precedence over the derived one but the two are never
/// silently merged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum Moic {
    /// Supplied by the reporting source.
    Provided(Decimal),
    /// Derived from invested, returned, and NAV totals.
    Calculated(Decimal),
}

impl Moic {
    /// The multiple, regardless of provenance.
    #[must_use]
    pub fn value(&self) -> Decimal {
        match self {
            Self::Provided(value) | Self::Calculated(value) => *value,
        }
    }

    /// Whether the multiple was supplied rather than derived.
    #[must_use]
    pub fn is_provided(&self) -> bool {
        matches!(self, Self::Provided(_))
    }
}

/// Reporting band for residual-value weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RvpiTier {
    /// RVPI at or above 1.0: unrealized value exceeds invested capital.
    High,
    /// RVPI in [0.5, 1.0).
    Medium,
    /// RVPI in (0, 0.5).
    Low,
    /// No residual value.
    None,
}

impl RvpiTier {
    /// Classifies a residual-value weight into its reporting band.
    ///
    /// Presentational metadata only; the numeric RVPI is the contract.
    #[must_use]
    pub fn classify(rvpi: Decimal) -> Self {
        if rvpi >= Decimal::ONE {
            Self::High
        } else if rvpi >= dec!(0.5) {
            Self::Medium
        } else if rvpi > Decimal::ZERO {
            Self::Low
        } else {
            Self::None
        }
    }
}

impl fmt::Display for RvpiTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::None => "None",
        };
        write!(f, "{label}")
    }
}

/// Diagnostic for the identity `TVPI = DPI + RVPI`.
///
/// The three ratios are rounded independently, so the identity holds
/// only within a tolerance. A violation is surfaced, never silently
/// reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultipleCheck {
    /// Total value to paid-in.
    pub tvpi: Decimal,
    /// Distributions to paid-in.
    pub dpi: Decimal,
    /// Residual value to paid-in.
    pub rvpi: Decimal,
    /// `|tvpi - (dpi + rvpi)|`.
    pub difference: Decimal,
    /// Whether the difference is within tolerance.
    pub holds: bool,
}

impl MultipleCheck {
    /// Evaluates the identity over already-rounded ratios.
    #[must_use]
    pub fn evaluate(tvpi: Decimal, dpi: Decimal, rvpi: Decimal) -> Self {
        let difference = (tvpi - (dpi + rvpi)).abs();
        Self {
            tvpi,
            dpi,
            rvpi,
            difference,
            holds: difference <= dec!(0.01),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_dpi() {
        assert_eq!(dpi(dec!(1000000), dec!(250000)), Some(dec!(0.25)));
        assert_eq!(dpi(dec!(0), dec!(250000)), None);
        assert_eq!(dpi(dec!(-5), dec!(250000)), None);
    }

    #[test]
    fn test_dpi_rounds_to_four_places() {
        // 1 / 3 = 0.3333...
        assert_eq!(dpi(dec!(3), dec!(1)), Some(dec!(0.3333)));
    }

    #[test]
    fn test_tvpi_active_includes_nav() {
        let result = tvpi(
            dec!(1000000),
            dec!(250000),
            dec!(900000),
            VehicleStatus::Active,
        );
        assert_eq!(result, Some(dec!(1.15)));
    }

    #[test]
    fn test_tvpi_closed_forces_nav_to_zero() {
        let result = tvpi(
            dec!(1000000),
            dec!(250000),
            dec!(900000),
            VehicleStatus::Closed,
        );
        assert_eq!(result, Some(dec!(0.25)));
    }

    #[test]
    fn test_tvpi_undefined_without_investment() {
        assert_eq!(
            tvpi(dec!(0), dec!(100), dec!(100), VehicleStatus::Active),
            None
        );
    }

    #[test]
    fn test_rvpi_is_total() {
        assert_eq!(
            rvpi(dec!(1000000), dec!(900000), VehicleStatus::Active),
            dec!(0.9)
        );
        assert_eq!(
            rvpi(dec!(1000000), dec!(900000), VehicleStatus::Closed),
            dec!(0)
        );
        assert_eq!(rvpi(dec!(0), dec!(900000), VehicleStatus::Active), dec!(0));
    }

    #[test]
    fn test_moic_is_unrounded() {
        let result = moic(dec!(3), dec!(1), dec!(1), VehicleStatus::Active);
        // 2/3 at full precision, not 0.6667.
        assert_eq!(result, Some(dec!(2) / dec!(3)));
    }

    #[test]
    fn test_moic_matches_tvpi_before_rounding() {
        let invested = dec!(1000000);
        let returned = dec!(250000);
        let nav = dec!(900000);
        let m = moic(invested, returned, nav, VehicleStatus::Active).unwrap();
        let t = tvpi(invested, returned, nav, VehicleStatus::Active).unwrap();
        assert_eq!(m.round_dp(RATIO_PRECISION), t);
    }

    #[test]
    fn test_gap_to_target() {
        assert_eq!(
            gap_to_target(Some(dec!(0.1994)), Some(dec!(0.15))),
            Some(dec!(0.0494))
        );
        assert_eq!(gap_to_target(None, Some(dec!(0.15))), None);
        assert_eq!(gap_to_target(Some(dec!(0.1994)), None), None);
    }

    #[test]
    fn test_estimated_return() {
        // 1,000,000 at 15% over exactly three years.
        let result = estimated_return(
            dec!(1000000),
            Some(dec!(0.15)),
            Some(date(2021, 1, 1)),
            date(2024, 1, 1),
        );
        assert_eq!(result, Some(dec!(1520875.00)));
    }

    #[test]
    fn test_estimated_return_undefined_cases() {
        let start = Some(date(2021, 1, 1));
        let horizon = date(2024, 1, 1);

        assert_eq!(estimated_return(dec!(0), Some(dec!(0.15)), start, horizon), None);
        assert_eq!(estimated_return(dec!(1000000), None, start, horizon), None);
        assert_eq!(
            estimated_return(dec!(1000000), Some(dec!(0)), start, horizon),
            None
        );
        assert_eq!(
            estimated_return(dec!(1000000), Some(dec!(0.15)), None, horizon),
            None
        );
        // Horizon at or before the start.
        assert_eq!(
            estimated_return(dec!(1000000), Some(dec!(0.15)), start, date(2021, 1, 1)),
            None
        );
        assert_eq!(
            estimated_return(dec!(1000000), Some(dec!(0.15)), start, date(2020, 6, 1)),
            None
        );
    }

    #[test]
    fn test_moic_provenance() {
        let provided = Moic::Provided(dec!(1.8));
        let calculated = Moic::Calculated(dec!(1.15));
        assert!(provided.is_provided());
        assert!(!calculated.is_provided());
        assert_eq!(provided.value(), dec!(1.8));
        assert_eq!(calculated.value(), dec!(1.15));
    }

    #[test]
    fn test_rvpi_tier_boundaries() {
        assert_eq!(RvpiTier::classify(dec!(1.5)), RvpiTier::High);
        assert_eq!(RvpiTier::classify(dec!(1.0)), RvpiTier::High);
        assert_eq!(RvpiTier::classify(dec!(0.9999)), RvpiTier::Medium);
        assert_eq!(RvpiTier::classify(dec!(0.5)), RvpiTier::Medium);
        assert_eq!(RvpiTier::classify(dec!(0.4999)), RvpiTier::Low);
        assert_eq!(RvpiTier::classify(dec!(0.0001)), RvpiTier::Low);
        assert_eq!(RvpiTier::classify(dec!(0)), RvpiTier::None);
        assert_eq!(RvpiTier::classify(dec!(-0.1)), RvpiTier::None);
    }

    #[test]
    fn test_multiple_check_holds() {
        let check = MultipleCheck::evaluate(dec!(1.15), dec!(0.25), dec!(0.9));
        assert!(check.holds);
        assert_eq!(check.difference, dec!(0));
    }

    #[test]
    fn test_multiple_check_within_rounding_tolerance() {
        let check = MultipleCheck::evaluate(dec!(1.1501), dec!(0.25), dec!(0.8960));
        assert!(check.holds);
        assert_eq!(check.difference, dec!(0.0041));
    }

    #[test]
    fn test_multiple_check_violation_is_surfaced() {
        let check = MultipleCheck::evaluate(dec!(1.5), dec!(0.25), dec!(0.9));
        assert!(!check.holds);
        assert_eq!(check.difference, dec!(0.35));
    }

    #[test]
    fn test_tier_serde_uses_lowercase() {
        let json = serde_json::to_string(&RvpiTier::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_moic_serde_tags_source() {
        let json = serde_json::to_string(&Moic::Provided(dec!(1.8))).unwrap();
        assert_eq!(json, "{\"source\":\"provided\",\"value\":1.8}");
    }
}
