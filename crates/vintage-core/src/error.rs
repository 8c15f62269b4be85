//! Error types for the Vintage library.
//!
//! This module defines the error types used throughout Vintage,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Vintage operations.
pub type VintageResult<T> = Result<T, VintageError>;

/// The main error type for Vintage operations.
#[derive(Error, Debug, Clone)]
pub enum VintageError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid monetary amount.
    #[error("Invalid amount: {value} - {reason}")]
    InvalidAmount {
        /// The invalid amount.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid FX conversion rate.
    #[error("Invalid FX rate: {value} - {reason}")]
    InvalidFxRate {
        /// The invalid rate.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid cash flow record.
    #[error("Invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the invalid cash flow.
        reason: String,
    },

    /// Unknown or unsupported currency code.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The unrecognized currency code.
        code: String,
    },

    /// Day count calculation error.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl VintageError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid FX rate error.
    #[must_use]
    pub fn invalid_fx_rate(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidFxRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Creates a config error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}
