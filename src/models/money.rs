//! Money type for displaying currency amounts
//!
//! Expense amounts are stored as SQLite `REAL`, so arithmetic happens on `f64`.
//! `Money` is the display-side representation: the amount rounded to whole
//! cents (hundredths of the currency unit) held as an `i64`.

use std::fmt;

/// A monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_dashboard::models::Money;
    /// let amount = Money::from_cents(100050);
    /// assert_eq!(amount.to_string(), "1,000.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Round a floating-point amount to the nearest cent
    ///
    /// Rounding is decided on the exact binary value, as `{:.2}` prints it:
    /// `1.115` (stored as 1.11499...) becomes 111 cents, and an exact tie such
    /// as `0.125` goes to the even cent.
    /// Returns `None` for NaN, infinities and amounts outside the `i64` cent range.
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let digits: String = format!("{:.2}", amount)
            .chars()
            .filter(|c| *c != '.')
            .collect();

        digits.parse::<i64>().ok().map(Self)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole currency units, without sign
    pub const fn units_abs(&self) -> u64 {
        self.0.unsigned_abs() / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> u64 {
        self.0.unsigned_abs() % 100
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol, e.g. `"₹ 1,000.50"` or `"₹ -11,250.75"`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self)
    }
}

/// Insert a comma between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Add thousands separators to a plain decimal such as `-1234.50`
pub(crate) fn group_decimal(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (units, fraction) = match unsigned.split_once('.') {
        Some((units, fraction)) => (units, Some(fraction)),
        None => (unsigned, None),
    };

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, group_thousands(units), fraction),
        None => format!("{}{}", sign, group_thousands(units)),
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            group_thousands(&self.units_abs().to_string()),
            self.cents_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units_abs(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_amount_rounds_to_cents() {
        assert_eq!(Money::from_amount(1000.5).unwrap().cents(), 100050);
        assert_eq!(Money::from_amount(1234567.891).unwrap().cents(), 123456789);
        assert_eq!(Money::from_amount(999.999).unwrap().cents(), 100000);
        assert_eq!(Money::from_amount(-0.004).unwrap().cents(), 0);
    }

    #[test]
    fn test_from_amount_rounds_stored_value() {
        // Each of these is stored just below the written half cent.
        assert_eq!(Money::from_amount(0.015).unwrap().cents(), 1);
        assert_eq!(Money::from_amount(1.115).unwrap().cents(), 111);
        assert_eq!(Money::from_amount(2.675).unwrap().cents(), 267);
        assert_eq!(Money::from_amount(-1.115).unwrap().cents(), -111);

        // Exact binary ties go to the even cent.
        assert_eq!(Money::from_amount(0.125).unwrap().cents(), 12);
        assert_eq!(Money::from_amount(0.375).unwrap().cents(), 38);
    }

    #[test]
    fn test_from_amount_rejects_non_finite() {
        assert!(Money::from_amount(f64::NAN).is_none());
        assert!(Money::from_amount(f64::INFINITY).is_none());
        assert!(Money::from_amount(f64::NEG_INFINITY).is_none());
        assert!(Money::from_amount(1e300).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(99999).to_string(), "999.99");
        assert_eq!(Money::from_cents(100000).to_string(), "1,000.00");
        assert_eq!(Money::from_cents(-1125075).to_string(), "-11,250.75");
        assert_eq!(Money::from_cents(123456789).to_string(), "1,234,567.89");
    }

    #[test]
    fn test_display_extremes() {
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-92,233,720,368,547,758.08");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100000"), "100,000");
        assert_eq!(group_thousands("1000000"), "1,000,000");
    }

    #[test]
    fn test_group_decimal() {
        assert_eq!(group_decimal("0.00"), "0.00");
        assert_eq!(group_decimal("1234.50"), "1,234.50");
        assert_eq!(group_decimal("-11250.75"), "-11,250.75");
        assert_eq!(
            group_decimal("100000000000000000000.00"),
            "100,000,000,000,000,000,000.00"
        );
        assert_eq!(group_decimal("12345"), "12,345");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(100050).format_with_symbol("₹"), "₹ 1,000.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("$"), "$ -10.50");
    }
}
