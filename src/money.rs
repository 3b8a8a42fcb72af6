use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal amount")]
    Invalid(String),

    #[error("'{0}' has more than two decimal places")]
    TooPrecise(String),

    #[error("amount must not be negative, got {0}")]
    Negative(String),

    #[error("amount must be a finite number")]
    NotFinite,

    #[error("amount does not fit in u64 cents")]
    Overflow,
}

/// A non-negative currency amount stored as whole cents.
///
/// Displays in the en-US currency format: `$1,234.56`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "f64")]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub const ZERO: Amount = Amount { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Amount { cents }
    }

    pub fn from_dollars(dollars: u64) -> Result<Self, AmountError> {
        dollars
            .checked_mul(100)
            .map(Amount::from_cents)
            .ok_or(AmountError::Overflow)
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn dollars(&self) -> u64 {
        self.cents / 100
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.dollars().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${}.{:02}", grouped, self.cents % 100)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Accepts `100`, `100.5`, `100.00`, with an optional leading `$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
        if unsigned.is_empty() {
            return Err(AmountError::Empty);
        }
        if unsigned.starts_with('-') {
            return Err(AmountError::Negative(trimmed.to_string()));
        }

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(AmountError::Invalid(trimmed.to_string()));
        }
        if fraction.len() > 2 {
            return Err(AmountError::TooPrecise(trimmed.to_string()));
        }

        let dollars: u64 = whole.parse().map_err(|_| AmountError::Overflow)?;
        let invalid = |_: std::num::ParseIntError| AmountError::Invalid(trimmed.to_string());
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(invalid)? * 10,
            _ => fraction.parse().map_err(invalid)?,
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Amount::from_cents)
            .ok_or(AmountError::Overflow)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    /// Rounds to the nearest cent.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value.to_string()));
        }
        let cents = (value * 100.0).round();
        if cents >= u64::MAX as f64 {
            return Err(AmountError::Overflow);
        }
        Ok(Amount::from_cents(cents as u64))
    }
}
