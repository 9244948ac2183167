//! The entity registry
//!
//! One authoritative map per entity family. The original kept separate
//! collections for every subtype and synchronized them by hand; here
//! role and category membership are derived by query, so they can never
//! drift out of sync.
//!
//! All mutation goes through the slots-record operations in
//! [`people`] and [`movies`]: validate on a staged copy, commit only on
//! success, leave the registry untouched on any violation.

mod cascade;
pub mod checks;
mod movies;
mod people;

use std::collections::BTreeMap;

use cinelog_domain::{Movie, MovieCategory, MovieId, Person, PersonId};

pub use movies::{AddMovieSlots, UpdateMovieSlots};
pub use people::{AddPersonSlots, AgentSlot, UpdatePersonSlots};

/// In-memory registry of persons and movies
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) people: BTreeMap<PersonId, Person>,
    pub(crate) movies: BTreeMap<MovieId, Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Persons holding the director role (derived, not a partition)
    pub fn directors(&self) -> impl Iterator<Item = &Person> {
        self.people.values().filter(|p| p.is_director())
    }

    /// Persons holding the actor role (derived, not a partition)
    pub fn actors(&self) -> impl Iterator<Item = &Person> {
        self.people.values().filter(|p| p.is_actor())
    }

    /// Movies of one category (derived, not a partition)
    pub fn movies_in_category(&self, category: MovieCategory) -> impl Iterator<Item = &Movie> {
        self.movies
            .values()
            .filter(move |m| m.category() == category)
    }

    pub fn movies_directed_by(&self, director: PersonId) -> impl Iterator<Item = &Movie> {
        self.movies
            .values()
            .filter(move |m| m.director() == director)
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.people.clear();
        self.movies.clear();
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared test setup for the catalog operation tests

    use super::*;

    /// A catalog seeded with the demo data of the original app: person 1
    /// directs and acts, person 2 acts, movie 1 has both in the cast.
    pub fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_person(AddPersonSlots {
                person_id: 1,
                name: "Quentin Tarantino".into(),
                director: true,
                actor: true,
                agent: None,
            })
            .unwrap();
        catalog
            .add_person(AddPersonSlots {
                person_id: 2,
                name: "Uma Thurman".into(),
                director: false,
                actor: true,
                agent: None,
            })
            .unwrap();
        catalog
            .add_movie(AddMovieSlots {
                movie_id: 1,
                title: "Kill Bill".into(),
                release_date: "2003-10-10".into(),
                director_id: 1,
                actor_id_refs: vec![1, 2],
                ..AddMovieSlots::default()
            })
            .unwrap();
        catalog
    }
}
