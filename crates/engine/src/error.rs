//! Engine-level error type

use thiserror::Error;

use cinelog_domain::ConstraintViolation;

use crate::store::StoreError;

/// Failure surfaced by the application façade
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
