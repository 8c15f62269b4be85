//! Display formatting for reported metrics.
//!
//! Rendering only, no numeric logic. Each formatter has an `Option`
//! variant that renders an absent metric as [`UNDEFINED`]; that dash is
//! the only permitted rendering of an undefined value, so reports never
//! show a zero that is really an absence.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use vintage_core::types::Currency;

/// Placeholder rendered for an absent metric.
pub const UNDEFINED: &str = "-";

/// Formats a decimal fraction as a percentage with two decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use vintage_metrics::format::format_percent;
///
/// assert_eq!(format_percent(dec!(0.1994)), "19.94%");
/// ```
#[must_use]
pub fn format_percent(rate: Decimal) -> String {
    let percent = (rate * dec!(100)).round_dp(2);
    format!("{percent:.2}%")
}

/// [`format_percent`] over an optional rate.
#[must_use]
pub fn format_percent_opt(rate: Option<Decimal>) -> String {
    rate.map_or_else(|| UNDEFINED.to_string(), format_percent)
}

/// Formats a capital multiple with two decimals and an `x` suffix.
#[must_use]
pub fn format_multiple(multiple: Decimal) -> String {
    let multiple = multiple.round_dp(2);
    format!("{multiple:.2}x")
}

/// [`format_multiple`] over an optional multiple.
#[must_use]
pub fn format_multiple_opt(multiple: Option<Decimal>) -> String {
    multiple.map_or_else(|| UNDEFINED.to_string(), format_multiple)
}

/// Formats a monetary amount with thousands separators and two
/// decimals.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    add_thousands_separators(&format!("{amount:.2}"))
}

/// [`format_money`] over an optional amount.
#[must_use]
pub fn format_money_opt(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| UNDEFINED.to_string(), format_money)
}

/// Formats a monetary amount prefixed with its currency symbol.
///
/// Negative amounts place the sign before the symbol: `-$1,000.00`.
#[must_use]
pub fn format_money_with_symbol(amount: Decimal, currency: Currency) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{}{}", currency.symbol(), format_money(-amount))
    } else {
        format!("{}{}", currency.symbol(), format_money(amount))
    }
}

/// [`format_money_with_symbol`] over an optional amount.
#[must_use]
pub fn format_money_with_symbol_opt(amount: Option<Decimal>, currency: Currency) -> String {
    amount.map_or_else(
        || UNDEFINED.to_string(),
        |value| format_money_with_symbol(value, currency),
    )
}

/// Inserts thousands separators into a plain formatted number.
///
/// The sign is stripped before grouping so it never lands inside a
/// group.
fn add_thousands_separators(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer_part.chars().rev().collect();
    let grouped: String = digits
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect();

    match decimal_part {
        Some(dec) => format!("{sign}{grouped}.{dec}"),
        None => format!("{sign}{grouped}"),
    }
}
