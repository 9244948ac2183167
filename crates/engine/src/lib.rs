//! Cinelog engine
//!
//! The registry side of the catalog: in-memory entity maps with
//! referential integrity, the store port with its adapters, the storage
//! record format, and the application façade binding them together.

pub mod app;
pub mod catalog;
pub mod error;
pub mod records;
pub mod store;

pub use app::{MovieDatabase, MOVIES_KEY, PEOPLE_KEY};
pub use catalog::{
    AddMovieSlots, AddPersonSlots, AgentSlot, Catalog, UpdateMovieSlots, UpdatePersonSlots,
};
pub use error::AppError;
pub use records::{MovieRecord, PersonRecord};
pub use store::{FileStore, MemoryStore, Store, StoreError};
