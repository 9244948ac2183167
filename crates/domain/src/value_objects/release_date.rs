//! Release date value object
//!
//! The catalog owns its calendar arithmetic instead of delegating it to a
//! date library: the kernel must distinguish lexical problems (pattern
//! mismatch), plain range problems (month/day outside their base ranges),
//! and interval problems (days that do not exist in the given month, or
//! dates before the first public film screening on 1895-12-28).
//!
//! `chrono` is kept at the boundary only: a `ReleaseDate` can be built
//! from a `chrono::NaiveDate`, mirroring the original model's acceptance
//! of ready-made date objects alongside raw strings.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;

/// The earliest admissible release date (first public film screening)
const FLOOR: (i32, u32, u32) = (1895, 12, 28);

/// A chronologically valid release date on or after 1895-12-28
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReleaseDate {
    year: i32,
    month: u32,
    day: u32,
}

impl ReleaseDate {
    /// Create a validated release date from year/month/day components.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation::OutOfRange` if `month` is outside `[1, 12]`
    ///   or `day` is outside `[1, 31]`
    /// - `ConstraintViolation::IntervalViolation` if `day` does not exist
    ///   in the given month (30-day months, February, leap-year rule) or
    ///   the date falls before 1895-12-28
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ConstraintViolation> {
        if !(1..=12).contains(&month) {
            return Err(ConstraintViolation::out_of_range(
                "The month must be between 1 and 12",
            ));
        }
        if !(1..=31).contains(&day) {
            return Err(ConstraintViolation::out_of_range(
                "The day must be between 1 and 31",
            ));
        }
        if day > days_in_month(year, month) {
            return Err(ConstraintViolation::interval(format!(
                "Day {day} does not exist in month {month} of year {year}"
            )));
        }
        let date = Self { year, month, day };
        if (year, month, day) < FLOOR {
            return Err(ConstraintViolation::interval(format!(
                "The release date must not be earlier than 1895-12-28, got {date}"
            )));
        }
        Ok(date)
    }

    /// Create a release date from a `chrono` calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation::IntervalViolation` if the date falls
    /// before 1895-12-28.
    pub fn from_naive(date: NaiveDate) -> Result<Self, ConstraintViolation> {
        Self::new(date.year(), date.month(), date.day())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month of the given year
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ReleaseDate {
    type Err = ConstraintViolation;

    /// Parse a `"Y-M-D"` date string.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation::MandatoryValueMissing` for empty input
    /// - `ConstraintViolation::PatternMismatch` for a malformed triplet
    ///   or non-numeric components
    /// - range/interval violations as in [`ReleaseDate::new`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConstraintViolation::mandatory(
                "A release date must be provided",
            ));
        }
        let parts: Vec<&str> = trimmed.split('-').collect();
        let &[year, month, day] = parts.as_slice() else {
            return Err(ConstraintViolation::pattern(format!(
                "The release date must have the form Y-M-D, got {trimmed:?}"
            )));
        };
        let year: i32 = year
            .parse()
            .map_err(|_| ConstraintViolation::pattern("The year must be an integer"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ConstraintViolation::pattern("The month must be an unsigned integer"))?;
        let day: u32 = day
            .parse()
            .map_err(|_| ConstraintViolation::pattern("The day must be an unsigned integer"))?;
        Self::new(year, month, day)
    }
}

impl TryFrom<String> for ReleaseDate {
    type Error = ConstraintViolation;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReleaseDate> for String {
    fn from(date: ReleaseDate) -> String {
        date.to_string()
    }
}
