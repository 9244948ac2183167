//! Episode number newtype

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;

/// A positive episode number within a TV series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EpisodeNo(u32);

impl EpisodeNo {
    /// Create a validated episode number.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation::OutOfRange` if `raw` is zero.
    pub fn new(raw: u32) -> Result<Self, ConstraintViolation> {
        if raw == 0 {
            return Err(ConstraintViolation::out_of_range(
                "The episode number must be a positive integer",
            ));
        }
        Ok(Self(raw))
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EpisodeNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for EpisodeNo {
    type Error = ConstraintViolation;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<EpisodeNo> for u32 {
    fn from(no: EpisodeNo) -> u32 {
        no.0
    }
}

impl FromStr for EpisodeNo {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s.trim().parse().map_err(|_| {
            ConstraintViolation::pattern("The episode number must be an unsigned integer")
        })?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_number_accepted() {
        assert_eq!(EpisodeNo::new(12).unwrap().get(), 12);
    }

    #[test]
    fn zero_rejected() {
        let err = EpisodeNo::new(0).unwrap_err();
        assert!(matches!(err, ConstraintViolation::OutOfRange(_)));
    }

    #[test]
    fn non_numeric_string_rejected() {
        let err = "twelve".parse::<EpisodeNo>().unwrap_err();
        assert!(matches!(err, ConstraintViolation::PatternMismatch(_)));
    }
}
