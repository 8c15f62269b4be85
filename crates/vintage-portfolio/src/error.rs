//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.
//! Errors cover construction and configuration problems only; metric
//! calculations report an undefined result as `None` rather than an error.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A transaction record that violates its kind's constraints.
    #[error("Invalid record: {reason}")]
    InvalidRecord {
        /// The reason the record is invalid.
        reason: String,
    },

    /// Invalid vehicle data.
    #[error("Invalid vehicle '{id}': {reason}")]
    InvalidVehicle {
        /// The vehicle ID.
        id: String,
        /// The reason the vehicle is invalid.
        reason: String,
    },

    /// FX rate that is zero or negative.
    #[error("Invalid FX rate: {rate} (must be positive)")]
    InvalidFxRate {
        /// The rejected rate value.
        rate: String,
    },

    /// A portfolio rate at or below -100%.
    #[error("Invalid {name}: {value} (must be greater than -1)")]
    InvalidRate {
        /// Which rate was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }

    /// Create an invalid vehicle error.
    #[must_use]
    pub fn invalid_vehicle(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVehicle {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid FX rate error.
    #[must_use]
    pub fn invalid_fx_rate(rate: impl ToString) -> Self {
        Self::InvalidFxRate {
            rate: rate.to_string(),
        }
    }

    /// Create an invalid rate error.
    #[must_use]
    pub fn invalid_rate(name: &'static str, value: f64) -> Self {
        Self::InvalidRate { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::missing_field("name");
        assert!(err.to_string().contains("name"));

        let err = PortfolioError::invalid_record("investment must be positive");
        assert!(err.to_string().contains("investment must be positive"));

        let err = PortfolioError::invalid_vehicle("FUND1", "duplicate id");
        assert!(err.to_string().contains("FUND1"));
        assert!(err.to_string().contains("duplicate id"));

        let err = PortfolioError::invalid_fx_rate("-0.5");
        assert!(err.to_string().contains("-0.5"));
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = PortfolioError::invalid_rate("finance_rate", -1.5);
        let message = err.to_string();
        assert!(message.contains("finance_rate"));
        assert!(message.contains("-1.5"));
    }

    #[test]
    fn test_error_clone() {
        let err = PortfolioError::missing_field("name");
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
