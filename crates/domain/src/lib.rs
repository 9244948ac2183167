//! Cinelog domain layer
//!
//! Pure model types for a movie catalog: validated identifier and value
//! newtypes, person and movie entities, and the constraint-violation
//! taxonomy every check reports through. No I/O and no registry state
//! live here; registry-relative checks (uniqueness, reference existence)
//! belong to `cinelog-engine`.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{ActorRole, Movie, MovieCategory, MovieKind, Person, PersonRoles};
pub use error::ConstraintViolation;
pub use ids::{MovieId, PersonId};
pub use value_objects::{is_leap_year, EpisodeNo, MovieTitle, PersonName, ReleaseDate, SeriesName};
