//! Transaction record representation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vintage_core::types::Date;

use crate::error::{PortfolioError, PortfolioResult};

/// The kind of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Capital called into the vehicle.
    Investment,
    /// Capital distributed back to investors.
    Distribution,
    /// A NAV observation with no cash movement.
    ValuationUpdate,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Investment => write!(f, "Investment"),
            Self::Distribution => write!(f, "Distribution"),
            Self::ValuationUpdate => write!(f, "Valuation Update"),
        }
    }
}

/// A dated entry in a vehicle's transaction ledger.
///
/// Each record moves cash in exactly one direction: an investment record
/// carries a positive `investment` and a zero `distribution`, and vice
/// versa. Valuation updates move no cash at all and exist only to assert
/// a NAV. The constructors enforce this shape, so a record can never hold
/// both amounts at once.
///
/// Amounts are stored in the vehicle's local currency; `fx_rate` converts
/// them to the reporting currency via the `*_base` accessors. The running
/// balance is derived by the owning vehicle, never set by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRecord {
    date: Date,
    kind: RecordKind,
    investment: Decimal,
    distribution: Decimal,
    valuation: Option<Decimal>,
    fx_rate: Decimal,
    running_balance: Decimal,
}

impl CashFlowRecord {
    /// Creates an investment (capital call) record.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is zero or negative.
    pub fn investment(date: Date, amount: Decimal) -> PortfolioResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(PortfolioError::invalid_record(
                "investment amount must be positive",
            ));
        }
        Ok(Self {
            date,
            kind: RecordKind::Investment,
            investment: amount,
            distribution: Decimal::ZERO,
            valuation: None,
            fx_rate: Decimal::ONE,
            running_balance: Decimal::ZERO,
        })
    }

    /// Creates a distribution record.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is zero or negative.
    pub fn distribution(date: Date, amount: Decimal) -> PortfolioResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(PortfolioError::invalid_record(
                "distribution amount must be positive",
            ));
        }
        Ok(Self {
            date,
            kind: RecordKind::Distribution,
            investment: Decimal::ZERO,
            distribution: amount,
            valuation: None,
            fx_rate: Decimal::ONE,
            running_balance: Decimal::ZERO,
        })
    }

    /// Creates a valuation update record.
    ///
    /// The record moves no cash; it only asserts the vehicle's NAV as of
    /// `date`.
    #[must_use]
    pub fn valuation_update(date: Date, valuation: Decimal) -> Self {
        Self {
            date,
            kind: RecordKind::ValuationUpdate,
            investment: Decimal::ZERO,
            distribution: Decimal::ZERO,
            valuation: Some(valuation),
            fx_rate: Decimal::ONE,
            running_balance: Decimal::ZERO,
        }
    }

    /// Sets the FX rate for converting to the reporting currency.
    ///
    /// Rate is expressed as: 1 unit of local currency = `fx_rate` units
    /// of reporting currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is zero or negative.
    pub fn with_fx_rate(mut self, fx_rate: Decimal) -> PortfolioResult<Self> {
        if fx_rate <= Decimal::ZERO {
            return Err(PortfolioError::invalid_fx_rate(fx_rate));
        }
        self.fx_rate = fx_rate;
        Ok(self)
    }

    /// Attaches a NAV observation to a cash-moving record.
    ///
    /// Any record kind may assert a valuation; this marks the record as
    /// an anchor for NAV resolution without changing its cash effect.
    #[must_use]
    pub fn with_valuation(mut self, valuation: Decimal) -> Self {
        self.valuation = Some(valuation);
        self
    }

    /// The record date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// The record kind.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Capital called, in local currency. Zero unless this is an
    /// investment record.
    #[must_use]
    pub fn investment_amount(&self) -> Decimal {
        self.investment
    }

    /// Capital distributed, in local currency. Zero unless this is a
    /// distribution record.
    #[must_use]
    pub fn distribution_amount(&self) -> Decimal {
        self.distribution
    }

    /// The NAV asserted by this record, if any, in local currency.
    #[must_use]
    pub fn valuation(&self) -> Option<Decimal> {
        self.valuation
    }

    /// FX rate to the reporting currency.
    #[must_use]
    pub fn fx_rate(&self) -> Decimal {
        self.fx_rate
    }

    /// Cumulative net capital through this record, in local currency.
    #[must_use]
    pub fn running_balance(&self) -> Decimal {
        self.running_balance
    }

    /// Capital called, converted to the reporting currency.
    #[must_use]
    pub fn investment_base(&self) -> Decimal {
        self.investment * self.fx_rate
    }

    /// Capital distributed, converted to the reporting currency.
    #[must_use]
    pub fn distribution_base(&self) -> Decimal {
        self.distribution * self.fx_rate
    }

    /// The asserted NAV, converted to the reporting currency.
    #[must_use]
    pub fn valuation_base(&self) -> Option<Decimal> {
        self.valuation.map(|v| v * self.fx_rate)
    }

    /// The running balance, converted to the reporting currency.
    #[must_use]
    pub fn running_balance_base(&self) -> Decimal {
        self.running_balance * self.fx_rate
    }

    pub(crate) fn set_running_balance(&mut self, balance: Decimal) {
        self.running_balance = balance;
    }
}
