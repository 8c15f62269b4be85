//! Error types for metric calculations.

use thiserror::Error;

/// Result type for metric calculations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors from metric calculator construction and configuration.
///
/// Calculation itself does not error: a metric that cannot be computed
/// from the given inputs is reported as `None` rather than a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A rate parameter is outside its valid domain.
    #[error("Invalid {name}: {value} (must be greater than -1)")]
    InvalidRate {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The solver search interval is not usable.
    #[error("Invalid search bracket: [{low}, {high}]")]
    InvalidBracket {
        /// Lower end of the rejected interval.
        low: f64,
        /// Upper end of the rejected interval.
        high: f64,
    },
}

impl MetricsError {
    /// Creates an invalid rate error.
    pub fn invalid_rate(name: &'static str, value: f64) -> Self {
        Self::InvalidRate { name, value }
    }

    /// Creates an invalid bracket error.
    pub fn invalid_bracket(low: f64, high: f64) -> Self {
        Self::InvalidBracket { low, high }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MetricsError::invalid_rate("finance_rate", -1.5);
        assert_eq!(err.to_string(), "Invalid finance_rate: -1.5 (must be greater than -1)");

        let err = MetricsError::invalid_bracket(0.5, 0.1);
        assert_eq!(err.to_string(), "Invalid search bracket: [0.5, 0.1]");
    }
}
