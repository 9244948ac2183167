//! Entity types: persons and movies

mod movie;
mod person;

pub use movie::{Movie, MovieCategory, MovieKind};
pub use person::{ActorRole, Person, PersonRoles};
