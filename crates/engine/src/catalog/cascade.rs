//! Dependency-aware person removal
//!
//! The original entangled this cascade with a walk across three
//! collections. Here it is one routine with a deterministic order:
//! detach incoming references first, destroy dependent movies second,
//! detach cast membership third, remove the target last. After it runs,
//! no reference to the removed person exists anywhere in the catalog.

use cinelog_domain::{MovieId, MovieKind, PersonId};

use super::Catalog;

/// Remove `id` from the catalog with the full referential cascade.
///
/// The caller has already established that the person exists.
pub(crate) fn remove_person(catalog: &mut Catalog, id: PersonId) {
    // 1. Detach agent references pointing at the person.
    for person in catalog.people.values_mut() {
        person.clear_agent_if(id);
    }

    // 2. Destroy dependents: movies with a mandatory reference to the
    //    person (directed by them, or a biography about them).
    let dependents: Vec<MovieId> = catalog
        .movies
        .values()
        .filter(|movie| {
            movie.director() == id
                || matches!(movie.kind(), MovieKind::Biography { about } if *about == id)
        })
        .map(|movie| movie.id())
        .collect();
    for movie_id in &dependents {
        catalog.movies.remove(movie_id);
    }

    // 3. Detach the person from every remaining cast (optional
    //    references: the movies survive).
    for movie in catalog.movies.values_mut() {
        movie.remove_cast_member(id);
    }

    // 4. Remove the target.
    catalog.people.remove(&id);
}
