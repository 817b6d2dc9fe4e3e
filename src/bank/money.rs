use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount, stored as ten-thousandths of a currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Number of stored units in one whole currency unit
    pub const SCALE: i64 = 10_000;

    const FRACTION_DIGITS: usize = 4;

    /// Builds an amount from whole currency units
    pub const fn whole(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = digits.split('.');
        let units = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        if units.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        let is_numeric = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !is_numeric(units) || !is_numeric(fraction) {
            Err(MoneyError::Parse("Invalid character", string.to_string()))?
        }

        if fraction.len() > Self::FRACTION_DIGITS {
            Err(MoneyError::Parse("Too many decimal places", string.to_string()))?
        }

        let units: i64 = if units.is_empty() { 0 } else { units.parse()? };
        let fraction: i64 = format!("{:0<width$}", fraction, width = Self::FRACTION_DIGITS).parse()?;

        let value = units
            .checked_mul(Self::SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Value out of range", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    /// Adds `other` in place, leaving `self` untouched on overflow
    pub fn add(&mut self, other: &Self) -> std::result::Result<(), MoneyError> {
        let a = self.0;
        let b = other.0;

        self.0 = a.checked_add(b).ok_or_else(|| {
            if b > 0 {
                MoneyError::Overflow("add", Money(a), *other)
            } else {
                MoneyError::Underflow("add", Money(a), *other)
            }
        })?;

        return Ok(());
    }

    /// Subtracts `other` in place, leaving `self` untouched on overflow
    pub fn sub(&mut self, other: &Self) -> std::result::Result<(), MoneyError> {
        let a = self.0;
        let b = other.0;

        self.0 = a.checked_sub(b).ok_or_else(|| {
            if b < 0 {
                MoneyError::Overflow("sub", Money(a), *other)
            } else {
                MoneyError::Underflow("sub", Money(a), *other)
            }
        })?;

        return Ok(());
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Renders with 2 decimals, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        let step = (Self::SCALE / 100) as u64;
        let cents = (self.0.unsigned_abs() + step / 2) / step;

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}
