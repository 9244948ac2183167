//! Identifier newtypes
//!
//! Identifiers in this model are user-supplied positive integers, not
//! generated surrogates. Each newtype validates positivity on
//! construction and coerces numeric strings via `FromStr`, so a raw form
//! value like `"12"` parses while `"abc"` is rejected with a
//! pattern-mismatch violation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(u32);

        impl $name {
            /// Create a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns `ConstraintViolation::OutOfRange` if `raw` is zero.
            pub fn new(raw: u32) -> Result<Self, ConstraintViolation> {
                if raw == 0 {
                    return Err(ConstraintViolation::out_of_range(concat!(
                        "The ",
                        $label,
                        " must be a positive integer"
                    )));
                }
                Ok(Self(raw))
            }

            /// Returns the raw integer value.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = ConstraintViolation;

            fn try_from(raw: u32) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ConstraintViolation;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw: u32 = s.trim().parse().map_err(|_| {
                    ConstraintViolation::pattern(concat!(
                        "The ",
                        $label,
                        " must be an unsigned integer"
                    ))
                })?;
                Self::new(raw)
            }
        }
    };
}

define_id!(PersonId, "person ID");
define_id!(MovieId, "movie ID");

#[cfg(test)]
mod tests {
    use super::*;

    mod person_id {
        use super::*;

        #[test]
        fn positive_integer_accepted() {
            let id = PersonId::new(1).unwrap();
            assert_eq!(id.get(), 1);
            assert_eq!(id.to_string(), "1");
        }

        #[test]
        fn zero_rejected() {
            let err = PersonId::new(0).unwrap_err();
            assert!(matches!(err, ConstraintViolation::OutOfRange(_)));
        }

        #[test]
        fn numeric_string_coerced() {
            let id: PersonId = " 42 ".parse().unwrap();
            assert_eq!(id.get(), 42);
        }

        #[test]
        fn non_numeric_string_rejected() {
            let err = "abc".parse::<PersonId>().unwrap_err();
            assert!(matches!(err, ConstraintViolation::PatternMismatch(_)));
        }

        #[test]
        fn negative_string_rejected() {
            let err = "-3".parse::<PersonId>().unwrap_err();
            assert!(matches!(err, ConstraintViolation::PatternMismatch(_)));
        }
    }

    mod movie_id {
        use super::*;

        #[test]
        fn serde_round_trip_as_integer() {
            let id = MovieId::new(7).unwrap();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "7");
            let back: MovieId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }

        #[test]
        fn serde_rejects_zero() {
            assert!(serde_json::from_str::<MovieId>("0").is_err());
        }
    }
}
