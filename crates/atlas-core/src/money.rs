//! # Money
//!
//! Fixed-point monetary values. Every amount in the system (prices, costs,
//! line totals, invoice totals, ledger sums) is an integer number of cents
//! wrapped in [`Money`].
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  Binary floats cannot represent most 2-decimal amounts:            │
//! │      0.1 + 0.2            → 0.30000000000000004                    │
//! │      100.50 + 10.05 (f64) → 110.55000000000001                     │
//! │                                                                    │
//! │  Integer cents always can:                                         │
//! │      10050 + 1005 = 11055 → "110.55", every time                   │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage keeps cents in INTEGER columns; the JSON surface sends decimal
//! strings like `"110.55"`. A JSON *number* is also accepted on input (the
//! client may send one) and is rounded to the nearest cent right at the
//! boundary, the only point where a float exists at all.
//!
//! ```rust
//! use atlas_core::money::Money;
//!
//! let price: Money = "19.99".parse().unwrap();
//! assert_eq!(price, Money::from_cents(1999));
//! assert_eq!(price.multiply_quantity(2).to_string(), "39.98");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money
// =============================================================================

/// An exact monetary amount, scale fixed at 2 (matching the store's
/// `numeric(10, 2)` columns).
///
/// Signed because the net-profit line of the financial summary can dip below
/// zero; plain inputs are sign-checked by the validation layer instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Wraps a raw cent count: `Money::from_cents(1999)` is 19.99.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// The raw cent count.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// 0.00.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Strictly less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Line-total arithmetic: `unit_price.multiply_quantity(qty)`.
    ///
    /// Cent × integer stays exact, so `19.99 × 2` is precisely `39.98` and
    /// an order total summed from line totals never drifts.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    // Nearest-cent conversion for JSON number inputs, half away from zero.
    // Mirrors what the storage engine would do assigning into a scale-2
    // numeric column.
    fn from_f64_lossy(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }
}

// =============================================================================
// Parsing & Formatting
// =============================================================================

/// Why a decimal string failed to parse as [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// Nothing but whitespace.
    #[error("amount is empty")]
    Empty,

    /// Stray characters, multiple dots, or no digits at all.
    #[error("invalid amount: '{0}'")]
    Invalid(String),

    /// Three or more fractional digits; the store only keeps two.
    #[error("amount '{0}' has more than two fractional digits")]
    TooPrecise(String),

    /// Outside the representable cent range.
    #[error("amount '{0}' is out of range")]
    OutOfRange(String),
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Accepts `[-]digits[.digits]` with up to two fractional digits:
    /// `"10"`, `"10.5"`, and `"10.50"` all parse to 1050 cents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(MoneyParseError::Invalid(s.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError::Invalid(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?
        };
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac
                .parse::<i64>()
                .map_err(|_| MoneyParseError::Invalid(s.to_string()))?
                * 10,
            _ => frac
                .parse::<i64>()
                .map_err(|_| MoneyParseError::Invalid(s.to_string()))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

/// Canonical two-digit decimal form, `"-12.05"`. Doubles as the JSON wire
/// representation, so it must stay parseable by `FromStr`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Summation for order totals and category totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|m| m.0).sum())
    }
}

// =============================================================================
// Serde
// =============================================================================

/// Always the exact decimal string, e.g. `"110.55"`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts `"110.55"` (exact) or `110.55` (rounded to the nearest cent).
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal amount as a string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Money::from_f64_lossy(v)
                    .ok_or_else(|| E::custom(format!("amount {v} is out of range")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                v.checked_mul(100)
                    .map(Money::from_cents)
                    .ok_or_else(|| E::custom(format!("amount {v} is out of range")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(|v| v.checked_mul(100))
                    .map(Money::from_cents)
                    .ok_or_else(|| E::custom(format!("amount {v} is out of range")))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_strings() {
        assert_eq!("10.99".parse::<Money>().unwrap(), Money::from_cents(1099));
        assert_eq!("10.5".parse::<Money>().unwrap(), Money::from_cents(1050));
        assert_eq!("10".parse::<Money>().unwrap(), Money::from_cents(1000));
        assert_eq!("0.05".parse::<Money>().unwrap(), Money::from_cents(5));
        assert_eq!(".50".parse::<Money>().unwrap(), Money::from_cents(50));
        assert_eq!("-5.50".parse::<Money>().unwrap(), Money::from_cents(-550));
        assert_eq!("+3.25".parse::<Money>().unwrap(), Money::from_cents(325));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(MoneyParseError::Empty));
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(MoneyParseError::Invalid(_))
        ));
        assert!(matches!(
            "1.2.3".parse::<Money>(),
            Err(MoneyParseError::Invalid(_))
        ));
        assert!(matches!(
            "1.234".parse::<Money>(),
            Err(MoneyParseError::TooPrecise(_))
        ));
        assert!(matches!(
            ".".parse::<Money>(),
            Err(MoneyParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_display_renders_two_digits() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for cents in [-12345, -1, 0, 5, 99, 100, 11055, 9_999_999] {
            let money = Money::from_cents(cents);
            let back: Money = money.to_string().parse().unwrap();
            assert_eq!(back, money);
        }
    }

    #[test]
    fn test_add_sub_assign() {
        let mut acc = Money::zero();
        acc += Money::from_cents(1250);
        acc += Money::from_cents(750);
        assert_eq!(acc, Money::from_cents(2000));
        acc -= Money::from_cents(500);
        assert_eq!(acc, Money::from_cents(1500));
        assert_eq!(acc - Money::from_cents(1500), Money::zero());
    }

    #[test]
    fn test_invoice_total_is_exact() {
        // 100.50 + 10.05 must be 110.55, never 110.55000000000001
        let amount: Money = "100.50".parse().unwrap();
        let tax: Money = "10.05".parse().unwrap();
        assert_eq!((amount + tax).to_string(), "110.55");
    }

    #[test]
    fn test_line_totals_match_order_example() {
        // qty 2 @ 19.99 = 39.98; qty 1 @ 10.00 = 10.00; order total 49.98
        let a = "19.99".parse::<Money>().unwrap().multiply_quantity(2);
        let b = "10.00".parse::<Money>().unwrap().multiply_quantity(1);
        assert_eq!(a.to_string(), "39.98");
        let total: Money = [a, b].into_iter().sum();
        assert_eq!(total.to_string(), "49.98");
    }

    #[test]
    fn test_serde_string_wire_format() {
        let money = Money::from_cents(11055);
        assert_eq!(serde_json::to_string(&money).unwrap(), "\"110.55\"");

        let from_string: Money = serde_json::from_str("\"110.55\"").unwrap();
        assert_eq!(from_string, money);
    }

    #[test]
    fn test_serde_accepts_json_numbers() {
        let from_float: Money = serde_json::from_str("110.55").unwrap();
        assert_eq!(from_float, Money::from_cents(11055));

        let from_int: Money = serde_json::from_str("10").unwrap();
        assert_eq!(from_int, Money::from_cents(1000));

        let negative: Money = serde_json::from_str("-300.00").unwrap();
        assert_eq!(negative, Money::from_cents(-30000));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert_eq!(total, Money::zero());
    }
}
