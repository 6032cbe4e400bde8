//! # Money Module
//!
//! Provides the `Money` type for billing amounts and the `CurrencyFormat`
//! used to display them.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every play formula is already integral (40000, 1000 × seats, ...)    │
//! │    so amounts and totals never need rounding.                           │
//! │                                                                         │
//! │  Dollars only appear at the very end, inside CurrencyFormat.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use playbill_core::money::{CurrencyFormat, Money};
//!
//! let amount = Money::from_cents(173_000);
//! assert_eq!(CurrencyFormat::usd().format(amount), "$1,730.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// amount_for(genre, audience) ──► EnrichedPerformance.amount
///                                        │
///                                        ▼ (sum)
///                              StatementData.total_amount ──► "$1,730.00"
/// ```
///
/// Serializes as a bare integer so statement JSON keeps `"amount": 65000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use playbill_core::money::Money;
    ///
    /// let price = Money::from_cents(65000); // $650.00
    /// assert_eq!(price.cents(), 65000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    ///
    /// ```rust
    /// use playbill_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1_000_000);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(3_000_000)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2).checked_mul_quantity(3), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts an amount, or `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-style display without grouping. Renderers use [`CurrencyFormat`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// Display configuration for money amounts.
///
/// Passed explicitly to every renderer instead of living in a global
/// formatter. Only the `en-US`/`USD` policy is shipped; the fields exist so
/// the policy is visible at the call site.
///
/// ## Output Shape
/// ```text
///  cents      ──►  sign + symbol + grouped major + "." + padded minor
///  173000     ──►        "$"    +   "1,730"     + "." + "00"
/// -12345678   ──►  "-" + "$"    +  "123,456"    + "." + "78"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// BCP 47 locale tag the separators are taken from.
    pub locale: String,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Symbol placed before the amount.
    pub symbol: String,

    /// Fraction digits. Zero drops the fraction; anything past two pads with zeros.
    pub min_decimals: u8,

    /// Thousands separator.
    pub group_separator: char,

    /// Decimal separator.
    pub decimal_separator: char,
}

impl CurrencyFormat {
    /// US dollars, `en-US` grouping, two decimals.
    pub fn usd() -> Self {
        CurrencyFormat {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
            symbol: "$".to_string(),
            min_decimals: 2,
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Formats a cent amount.
    ///
    /// ```rust
    /// use playbill_core::money::{CurrencyFormat, Money};
    ///
    /// let usd = CurrencyFormat::usd();
    /// assert_eq!(usd.format(Money::from_cents(65000)), "$650.00");
    /// assert_eq!(usd.format(Money::from_cents(173000)), "$1,730.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        // Minor units are cents, so anything past two digits is zero padding.
        let cents = amount.cents().unsigned_abs();
        let whole = cents / 100;
        let frac = cents % 100;

        let mut out = String::new();
        if amount.is_negative() {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&self.group_digits(whole));

        if self.min_decimals > 0 {
            out.push(self.decimal_separator);
            let digits = format!("{:02}", frac);
            out.push_str(&digits);
            for _ in 2..self.min_decimals {
                out.push('0');
            }
        }

        out
    }

    fn group_digits(&self, value: u64) -> String {
        let digits = value.to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }

        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::usd()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
