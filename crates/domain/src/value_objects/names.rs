//! Validated name newtypes for catalog entities
//!
//! These newtypes ensure that names and titles are valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;

/// Maximum length for name and title fields
const MAX_NAME_LENGTH: usize = 200;

macro_rules! define_name {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new validated value.
            ///
            /// # Errors
            ///
            /// Returns `ConstraintViolation::MandatoryValueMissing` if the
            /// value is empty after trimming, or
            /// `ConstraintViolation::OutOfRange` if it exceeds 200 characters.
            pub fn new(value: impl Into<String>) -> Result<Self, ConstraintViolation> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ConstraintViolation::mandatory(concat!(
                        "A ",
                        $label,
                        " must be provided"
                    )));
                }
                if trimmed.len() > MAX_NAME_LENGTH {
                    return Err(ConstraintViolation::out_of_range(format!(
                        concat!("The ", $label, " cannot exceed {} characters"),
                        MAX_NAME_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ConstraintViolation;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

define_name!(PersonName, "name");
define_name!(MovieTitle, "title");
define_name!(SeriesName, "TV series name");

#[cfg(test)]
mod tests {
    use super::*;

    mod person_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = PersonName::new("Quentin Tarantino").unwrap();
            assert_eq!(name.as_str(), "Quentin Tarantino");
            assert_eq!(name.to_string(), "Quentin Tarantino");
        }

        #[test]
        fn empty_name_rejected() {
            let err = PersonName::new("").unwrap_err();
            assert!(matches!(err, ConstraintViolation::MandatoryValueMissing(_)));
        }

        #[test]
        fn whitespace_only_rejected() {
            let err = PersonName::new("   ").unwrap_err();
            assert!(matches!(err, ConstraintViolation::MandatoryValueMissing(_)));
        }

        #[test]
        fn name_is_trimmed() {
            let name = PersonName::new("  Uma Thurman  ").unwrap();
            assert_eq!(name.as_str(), "Uma Thurman");
        }

        #[test]
        fn overlong_name_rejected() {
            let err = PersonName::new("x".repeat(201)).unwrap_err();
            assert!(matches!(err, ConstraintViolation::OutOfRange(_)));
        }
    }

    mod movie_title {
        use super::*;

        #[test]
        fn serde_round_trip_as_string() {
            let title = MovieTitle::new("Pulp Fiction").unwrap();
            let json = serde_json::to_string(&title).unwrap();
            assert_eq!(json, "\"Pulp Fiction\"");
            let back: MovieTitle = serde_json::from_str(&json).unwrap();
            assert_eq!(back, title);
        }

        #[test]
        fn serde_rejects_empty_string() {
            assert!(serde_json::from_str::<MovieTitle>("\"\"").is_err());
        }
    }
}
