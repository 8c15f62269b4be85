//! Day count conventions for fund cash flow calculations.
//!
//! A day count convention turns a pair of dates into a year fraction.
//! Private equity metrics conventionally use a single convention,
//! [`Act365Fixed`], for every annualization step; the trait exists so
//! callers that need another basis can supply their own.
//!
//! # Usage
//!
//! ```rust
//! use vintage_core::daycounts::{Act365Fixed, DayCount};
//! use vintage_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2020, 1, 15).unwrap();
//! let end = Date::from_ymd(2023, 1, 15).unwrap();
//!
//! let days = dc.day_count(start, end);
//! let year_fraction = dc.year_fraction(start, end);
//! assert_eq!(days, 1096);
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;
use rust_decimal::Decimal;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two dates
/// according to specific market conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` returns the fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// # Arguments
    ///
    /// * `start` - Start date
    /// * `end` - End date
    ///
    /// # Returns
    ///
    /// The fraction of a year between the two dates. Can be negative if end < start.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    ///
    /// Returns the number of days according to the convention.
    /// For ACT conventions, this is actual calendar days.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trait_object() {
        let dc: Box<dyn DayCount> = Box::new(Act365Fixed);
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.name(), "ACT/365F");
        assert_eq!(dc.year_fraction(start, end), dec!(1));
    }
}
