//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Construction from user input follows the safe-number contract: any
//! value that is missing, unparsable, or non-finite becomes exactly zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Create a Money amount from a floating-point currency value,
    /// rounded to the nearest cent.
    ///
    /// Safe-number contract: a non-finite value yields zero.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self((value * 100.0).round() as i64)
        } else {
            Self(0)
        }
    }

    /// Parse a money amount from free-form text.
    ///
    /// Currency symbols, grouping commas, and surrounding whitespace are
    /// ignored. Anything that still fails to parse as a number — including
    /// the empty string — coerces to zero rather than producing an error.
    ///
    /// # Examples
    /// ```
    /// use pulse_cli::models::Money;
    /// assert_eq!(Money::parse_lenient("1,234.56").cents(), 123456);
    /// assert_eq!(Money::parse_lenient("garbage").cents(), 0);
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let cleaned: String = input
            .trim()
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        cleaned
            .parse::<f64>()
            .map(Self::from_f64)
            .unwrap_or_else(|_| Self::zero())
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole currency-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The amount as a floating-point currency value
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Divide the amount into `divisor` equal parts, rounded to the nearest
    /// cent (half away from zero). Returns `None` for a zero divisor.
    pub fn div_round(&self, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let half = divisor.abs() / 2;
        let adjusted = if (self.0 < 0) != (divisor < 0) {
            self.0 - half
        } else {
            self.0 + half
        };
        Some(Self(adjusted / divisor))
    }

    /// Format the amount with a caller-supplied currency symbol,
    /// always with two decimal places.
    pub fn with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
