//! Money type for representing expense amounts
//!
//! Internally stores amounts in hundredths (i64) so sums are exact. The
//! database column is `REAL`; conversion rounds to the nearest hundredth.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols stripped when parsing user input
const KNOWN_SYMBOLS: [char; 4] = ['$', '₹', '€', '£'];

/// Largest exponent accepted in `1e3`-style input
const MAX_EXPONENT: u32 = 30;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from user input: 100 billion units.
    /// Around 900,000 such amounts still sum without leaving `i64`.
    pub const MAX_ABS_CENTS: i64 = 10_000_000_000_000;

    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and hundredths
    pub const fn from_units(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Convert a float, rounding to the nearest hundredth
    ///
    /// Out-of-range values saturate and NaN becomes zero; stored values go
    /// through [`Money::try_from_f64`] instead.
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Convert a stored `REAL` value, rounding to the nearest hundredth.
    /// `None` when the value is not finite or does not fit in hundredths.
    pub fn try_from_f64(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if cents.is_finite() && cents.abs() < i64::MAX as f64 {
            Some(Self(cents as i64))
        } else {
            None
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a floating point value (for the `REAL` column and charts)
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole units (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The hundredths part (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "$10", ".5", "1,250.00",
    /// "1e3", "2.5E-1". Input is never rounded: more than two significant
    /// decimal places is an error, as is a magnitude above
    /// [`Money::MAX_ABS_CENTS`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.trim_start_matches(KNOWN_SYMBOLS).trim();
        let cleaned: String = s.chars().filter(|c| *c != ',').collect();

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());

        let (mantissa, exponent) = match cleaned.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => {
                let exponent: i32 = cleaned[idx + 1..].parse().map_err(|_| invalid())?;
                if exponent.unsigned_abs() > MAX_EXPONENT {
                    return Err(out_of_range());
                }
                (&cleaned[..idx], exponent)
            }
            None => (cleaned.as_str(), 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !is_digits(int_part) || !is_digits(frac_part) {
            return Err(invalid());
        }

        // Shift the decimal point `exponent` places to the right
        let digits = format!("{}{}", int_part, frac_part);
        let point = int_part.len() as i64 + i64::from(exponent);
        let (whole, fraction) = if point <= 0 {
            (String::new(), format!("{}{}", "0".repeat((-point) as usize), digits))
        } else if point as usize >= digits.len() {
            let zeros = "0".repeat(point as usize - digits.len());
            (format!("{}{}", digits, zeros), String::new())
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            (whole.to_string(), fraction.to_string())
        };

        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooManyDecimals(original.to_string()));
        }

        let whole = whole.trim_start_matches('0');
        let units: i64 = if whole.is_empty() {
            0
        } else if whole.len() > 18 {
            return Err(out_of_range());
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = format!("{:0<2}", fraction)
            .parse()
            .map_err(|_| invalid())?;

        let magnitude = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .filter(|v| *v <= Self::MAX_ABS_CENTS)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(""))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    /// More than two significant decimal places
    TooManyDecimals(String),
    /// Magnitude above [`Money::MAX_ABS_CENTS`]
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::TooManyDecimals(s) => {
                write!(f, "Invalid amount: '{}' has more than two decimal places", s)
            }
            MoneyParseError::OutOfRange(s) => write!(
                f,
                "Invalid amount: '{}' is larger than {}",
                s,
                Money::from_cents(Money::MAX_ABS_CENTS)
            ),
        }
    }
}

impl std::error::Error for MoneyParseError {}
