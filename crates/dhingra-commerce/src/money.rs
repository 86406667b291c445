//! Money type for representing monetary values.
//!
//! Uses an integer count of the currency's smallest unit (paise, cents) to
//! avoid floating-point drift when discounts and totals are computed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Number of minor units in one major unit (100 for paise per rupee).
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., paise).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units (e.g., rupees).
    ///
    /// ```
    /// use dhingra_commerce::money::{Currency, Money};
    /// let price = Money::from_major(1000, Currency::INR);
    /// assert_eq!(price.amount_minor, 100_000);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Multiply by a quantity, clamping at the representable range.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }

    /// Reduce this amount by `percent` percent.
    ///
    /// Percentages above 100 are treated as 100. The result is rounded half
    /// away from zero to the nearest minor unit.
    ///
    /// ```
    /// use dhingra_commerce::money::{Currency, Money};
    /// let price = Money::from_major(1000, Currency::INR);
    /// assert_eq!(price.percent_off(10), Money::from_major(900, Currency::INR));
    /// ```
    pub fn percent_off(&self, percent: u8) -> Money {
        let keep = 100 - i128::from(percent.min(100));
        let scaled = i128::from(self.amount_minor) * keep;
        let rounded = (scaled.abs() + 50) / 100 * scaled.signum();
        // keep <= 100, so |rounded| <= |amount_minor| and fits back into i64.
        Money::new(rounded as i64, self.currency)
    }

    /// Format as a display string (e.g., "₹15,000.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "15,000.00").
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let major = group_thousands(abs / per_major.unsigned_abs());
        match self.currency.decimal_places() {
            0 => format!("{sign}{major}"),
            places => {
                let minor = abs % per_major.unsigned_abs();
                format!("{sign}{major}.{minor:0width$}", width = places as usize)
            }
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(15000, Currency::INR);
        assert_eq!(m.amount_minor, 1_500_000);

        let m = Money::from_major(100, Currency::JPY);
        assert_eq!(m.amount_minor, 100);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_major(15000, Currency::INR).display(), "\u{20b9}15,000.00");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(1_234_567, Currency::JPY).display(), "\u{00a5}1,234,567");
        assert_eq!(Money::new(-250, Currency::INR).display_amount(), "-2.50");
        assert_eq!(Money::zero(Currency::INR).display_amount(), "0.00");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::INR);
        assert_eq!(m.saturating_multiply(3), Money::new(3000, Currency::INR));
        assert_eq!(m.saturating_multiply(i64::MAX).amount_minor, i64::MAX);
        let debt = Money::new(-1000, Currency::INR);
        assert_eq!(debt.saturating_multiply(i64::MAX).amount_minor, i64::MIN);
    }

    #[test]
    fn test_percent_off() {
        let m = Money::from_major(3500, Currency::INR);
        assert_eq!(m.percent_off(10), Money::from_major(3150, Currency::INR));
        assert_eq!(m.percent_off(0), m);
        assert_eq!(m.percent_off(100), Money::zero(Currency::INR));
        assert_eq!(m.percent_off(250), Money::zero(Currency::INR));
    }

    #[test]
    fn test_percent_off_rounds_half_away_from_zero() {
        // 5% off 0.10 = 0.095 -> 0.10 (rounded up from 9.5 paise)
        assert_eq!(Money::new(10, Currency::INR).percent_off(5).amount_minor, 10);
        // 5% off 0.30 = 0.285 -> 0.29
        assert_eq!(Money::new(30, Currency::INR).percent_off(5).amount_minor, 29);
    }

    #[test]
    fn test_money_equality_includes_currency() {
        use std::collections::HashSet;

        let rupees = Money::new(500, Currency::INR);
        let dollars = Money::new(500, Currency::USD);
        assert_ne!(rupees, dollars);

        let set: HashSet<Money> = [rupees, dollars, Money::new(500, Currency::INR)].into();
        assert_eq!(set.len(), 2);
    }
}
