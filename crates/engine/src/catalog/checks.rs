//! Registry-relative check functions
//!
//! Pure and side-effect free: each check is deterministic relative to
//! the catalog snapshot it is given. Uniqueness and reference existence
//! can only be judged against a registry, which is why these live here
//! and not in the domain crate.

use cinelog_domain::{ConstraintViolation, MovieId, PersonId};

use super::Catalog;

/// The person id must not be taken yet (creation uniqueness).
pub fn check_person_id_free(catalog: &Catalog, id: PersonId) -> Result<(), ConstraintViolation> {
    if catalog.people.contains_key(&id) {
        return Err(ConstraintViolation::duplicate_id("person", id));
    }
    Ok(())
}

/// The person id must resolve to an existing person.
pub fn check_person_ref(catalog: &Catalog, id: PersonId) -> Result<(), ConstraintViolation> {
    if !catalog.people.contains_key(&id) {
        return Err(ConstraintViolation::dangling("person", id));
    }
    Ok(())
}

/// The id must resolve to a person holding the director role.
pub fn check_director_ref(catalog: &Catalog, id: PersonId) -> Result<(), ConstraintViolation> {
    match catalog.people.get(&id) {
        Some(person) if person.is_director() => Ok(()),
        _ => Err(ConstraintViolation::dangling("director", id)),
    }
}

/// The id must resolve to a person holding the actor role.
pub fn check_actor_ref(catalog: &Catalog, id: PersonId) -> Result<(), ConstraintViolation> {
    match catalog.people.get(&id) {
        Some(person) if person.is_actor() => Ok(()),
        _ => Err(ConstraintViolation::dangling("actor", id)),
    }
}

/// An agent may be any existing person, actor or not.
pub fn check_agent_ref(catalog: &Catalog, id: PersonId) -> Result<(), ConstraintViolation> {
    check_person_ref(catalog, id)
}

/// A biography subject may be any existing person.
pub fn check_subject_ref(catalog: &Catalog, id: PersonId) -> Result<(), ConstraintViolation> {
    check_person_ref(catalog, id)
}

/// The movie id must not be taken yet (creation uniqueness).
pub fn check_movie_id_free(catalog: &Catalog, id: MovieId) -> Result<(), ConstraintViolation> {
    if catalog.movies.contains_key(&id) {
        return Err(ConstraintViolation::duplicate_id("movie", id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::seeded;
    use super::*;

    fn pid(raw: u32) -> PersonId {
        PersonId::new(raw).unwrap()
    }

    #[test]
    fn taken_person_id_is_duplicate() {
        let catalog = seeded();
        let err = check_person_id_free(&catalog, pid(1)).unwrap_err();
        assert!(matches!(err, ConstraintViolation::DuplicateIdentifier { .. }));
        assert!(check_person_id_free(&catalog, pid(99)).is_ok());
    }

    #[test]
    fn director_check_requires_the_role() {
        let catalog = seeded();
        assert!(check_director_ref(&catalog, pid(1)).is_ok());
        // person 2 exists but is only an actor
        let err = check_director_ref(&catalog, pid(2)).unwrap_err();
        assert!(matches!(err, ConstraintViolation::DanglingReference { .. }));
    }

    #[test]
    fn actor_check_requires_the_role() {
        let mut catalog = seeded();
        catalog
            .add_person(super::super::AddPersonSlots {
                person_id: 3,
                name: "Roger Avary".into(),
                ..Default::default()
            })
            .unwrap();
        let err = check_actor_ref(&catalog, pid(3)).unwrap_err();
        assert!(matches!(err, ConstraintViolation::DanglingReference { .. }));
        assert!(check_actor_ref(&catalog, pid(2)).is_ok());
    }

    #[test]
    fn missing_person_reference_dangles() {
        let catalog = seeded();
        let err = check_person_ref(&catalog, pid(42)).unwrap_err();
        assert!(matches!(err, ConstraintViolation::DanglingReference { .. }));
    }

    #[test]
    fn checks_do_not_mutate_the_catalog() {
        let catalog = seeded();
        let before = catalog.clone();
        let _ = check_person_id_free(&catalog, pid(1));
        let _ = check_director_ref(&catalog, pid(2));
        let _ = check_movie_id_free(&catalog, MovieId::new(1).unwrap());
        assert_eq!(catalog.person_count(), before.person_count());
        assert_eq!(catalog.movie_count(), before.movie_count());
    }
}
