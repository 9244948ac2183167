//! Unified error type for the validation kernel
//!
//! Every check function and validating constructor in this crate reports
//! failures as a [`ConstraintViolation`]. A successful check is simply `Ok`,
//! so "no violation" never needs its own variant.

use thiserror::Error;

/// A constraint violation detected while validating a field or reference
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A mandatory field was absent or empty
    #[error("Mandatory value missing: {0}")]
    MandatoryValueMissing(String),

    /// A value fell outside its admissible range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// A value did not match the expected lexical form
    #[error("Pattern mismatch: {0}")]
    PatternMismatch(String),

    /// An identifier is already taken in its partition
    #[error("There is already a {entity_type} record with id {id}")]
    DuplicateIdentifier {
        entity_type: &'static str,
        id: String,
    },

    /// A reference does not resolve to an existing entity
    #[error("There is no {entity_type} record with id {id}")]
    DanglingReference {
        entity_type: &'static str,
        id: String,
    },

    /// A date violated calendar bounds (floor date, days per month)
    #[error("Interval violation: {0}")]
    IntervalViolation(String),

    /// The target of an update or destroy does not exist (non-fatal)
    #[error("No {entity_type} record with id {id} found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl ConstraintViolation {
    /// Create a mandatory-value violation.
    ///
    /// Use this when a required field is missing or empty after trimming.
    pub fn mandatory(msg: impl Into<String>) -> Self {
        Self::MandatoryValueMissing(msg.into())
    }

    /// Create an out-of-range violation
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Create a pattern-mismatch violation
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::PatternMismatch(msg.into())
    }

    /// Create a duplicate-identifier violation
    pub fn duplicate_id(entity_type: &'static str, id: impl ToString) -> Self {
        Self::DuplicateIdentifier {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a dangling-reference violation
    pub fn dangling(entity_type: &'static str, id: impl ToString) -> Self {
        Self::DanglingReference {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create an interval violation for date bounds
    pub fn interval(msg: impl Into<String>) -> Self {
        Self::IntervalViolation(msg.into())
    }

    /// Create a not-found report
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_message_names_partition_and_id() {
        let violation = ConstraintViolation::duplicate_id("movie", 7);
        assert_eq!(
            violation.to_string(),
            "There is already a movie record with id 7"
        );
    }

    #[test]
    fn dangling_reference_message_names_missing_target() {
        let violation = ConstraintViolation::dangling("director", 3);
        assert_eq!(
            violation.to_string(),
            "There is no director record with id 3"
        );
    }
}
