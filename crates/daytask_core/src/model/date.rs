//! Calendar date keys.
//!
//! # Responsibility
//! - Provide the store's grouping key as a validated ISO `YYYY-MM-DD` string.
//!
//! # Invariants
//! - A `DateKey` can only be built through `parse`, so every instance names a
//!   real calendar date.
//! - Lexicographic order on the inner string equals chronological order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date key regex"));

/// Validated calendar day identifier used as the store's grouping key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

/// Rejection reasons for date key input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// Input does not match the `YYYY-MM-DD` shape.
    Malformed(String),
    /// Shape is right but the month/day combination does not exist.
    OutOfRange(String),
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(input) => {
                write!(f, "date key `{input}` is not in YYYY-MM-DD form")
            }
            Self::OutOfRange(input) => {
                write!(f, "date key `{input}` names an impossible calendar date")
            }
        }
    }
}

impl Error for DateKeyError {}

impl DateKey {
    /// Parses and validates a `YYYY-MM-DD` date key.
    ///
    /// # Errors
    /// - `Malformed` when the shape is not four-two-two digits.
    /// - `OutOfRange` when month or day fall outside the real calendar
    ///   (February is leap-year aware).
    pub fn parse(input: &str) -> Result<Self, DateKeyError> {
        let trimmed = input.trim();
        let captures = DATE_KEY_RE
            .captures(trimmed)
            .ok_or_else(|| DateKeyError::Malformed(input.to_string()))?;

        // The regex guarantees pure digit groups, so these cannot fail.
        let year: u16 = captures[1].parse().expect("digit year group");
        let month: u8 = captures[2].parse().expect("digit month group");
        let day: u8 = captures[3].parse().expect("digit day group");

        if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
            return Err(DateKeyError::OutOfRange(input.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the key as its canonical `YYYY-MM-DD` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.0
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
