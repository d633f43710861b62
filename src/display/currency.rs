//! Currency formatting
//!
//! `format_currency(1000.5, "₹")` gives `"₹ 1,000.50"`: the symbol, a space,
//! an optional minus sign, comma-grouped units and exactly two cent digits.

use crate::models::money::group_decimal;
use crate::models::Money;

/// Format an amount with thousands separators and two fraction digits
///
/// Rounds on the exact binary value (see [`Money::from_amount`]). NaN and
/// infinite amounts are rendered as `NaN`, `inf` or `-inf` after the symbol;
/// finite amounts too large for `i64` cents are grouped from their `{:.2}` text.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    match Money::from_amount(amount) {
        Some(money) => money.format_with_symbol(symbol),
        None if amount.is_nan() => format!("{} NaN", symbol),
        None if amount.is_infinite() => {
            if amount.is_sign_negative() {
                format!("{} -inf", symbol)
            } else {
                format!("{} inf", symbol)
            }
        }
        None => format!("{} {}", symbol, group_decimal(&format!("{:.2}", amount))),
    }
}
