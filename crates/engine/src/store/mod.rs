//! The store port
//!
//! The catalog persists through this narrow contract: one serialized
//! payload per partition key, loaded at startup and flushed at exit.
//! Calls are synchronous and fail fast; a failure is reported to the
//! caller and never retried.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage failure, keyed by the partition that was touched
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open store at {path:?}: {reason}")]
    Open { path: String, reason: String },

    #[error("Failed to read key {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write key {key:?}: {reason}")]
    Write { key: String, reason: String },
}

impl StoreError {
    pub fn open(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Open {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn read(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Read {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Write {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Key-value persistence for serialized partition maps
pub trait Store {
    /// Load the payload stored under `key`, or `None` if the key has
    /// never been written.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `payload` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;
}
