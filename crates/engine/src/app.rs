//! The application façade
//!
//! [`MovieDatabase`] ties the catalog to a store: materialize at startup
//! (`retrieve_all`), flush at exit (`save_all`), and pass CRUD calls
//! through with logged outcomes, the way the original controller wrapped
//! its model classes. A violation aborts the one operation and leaves
//! both the catalog and the store untouched.

use tracing::{info, warn};

use cinelog_domain::ConstraintViolation;

use crate::catalog::{
    AddMovieSlots, AddPersonSlots, AgentSlot, Catalog, UpdateMovieSlots, UpdatePersonSlots,
};
use crate::error::AppError;
use crate::records::{self, MovieRecord, PersonRecord};
use crate::store::Store;

/// Storage key for the person partition
pub const PEOPLE_KEY: &str = "people";
/// Storage key for the movie partition
pub const MOVIES_KEY: &str = "movies";

/// Catalog plus store: the complete model layer of the application
pub struct MovieDatabase {
    catalog: Catalog,
    store: Box<dyn Store>,
}

impl MovieDatabase {
    pub fn new(store: Box<dyn Store>) -> Self {
        Self {
            catalog: Catalog::new(),
            store,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Materialize the catalog from the store.
    ///
    /// People load before movies, because movie records are re-validated
    /// against the person registry on the way in. A record that fails
    /// validation is logged and skipped; only store or whole-payload
    /// failures abort the load, leaving the in-memory state unchanged.
    /// Both partitions are staged into a fresh catalog that replaces the
    /// current one only once the whole load has succeeded.
    pub fn retrieve_all(&mut self) -> Result<(), AppError> {
        let mut staged = Catalog::new();

        if let Some(payload) = self.store.load(PEOPLE_KEY)? {
            // First pass creates every person without agents, second
            // pass assigns them, so an agent may reference a person
            // stored later in the map.
            let mut agents = Vec::new();
            for (key, value) in records::decode(&payload)? {
                match serde_json::from_value::<PersonRecord>(value) {
                    Ok(record) => {
                        let agent = record.agent;
                        match staged.add_person(record.creation_slots()) {
                            Ok(()) => {
                                if let Some(agent) = agent {
                                    agents.push((record.person_id, agent));
                                }
                            }
                            Err(violation) => {
                                warn!(%key, %violation, "skipping stored person record");
                            }
                        }
                    }
                    Err(e) => warn!(%key, error = %e, "skipping malformed person record"),
                }
            }
            for (person_id, agent) in agents {
                let slots = UpdatePersonSlots {
                    person_id,
                    agent: Some(AgentSlot::Assign(agent)),
                    ..Default::default()
                };
                if let Err(violation) = staged.update_person(slots) {
                    warn!(person_id, %violation, "dropping stored agent reference");
                }
            }
        }

        if let Some(payload) = self.store.load(MOVIES_KEY)? {
            for (key, value) in records::decode(&payload)? {
                match serde_json::from_value::<MovieRecord>(value) {
                    Ok(record) => {
                        if let Err(violation) = staged.add_movie(record.creation_slots()) {
                            warn!(%key, %violation, "skipping stored movie record");
                        }
                    }
                    Err(e) => warn!(%key, error = %e, "skipping malformed movie record"),
                }
            }
        }

        info!(
            people = staged.person_count(),
            movies = staged.movie_count(),
            "records loaded"
        );
        self.catalog = staged;
        Ok(())
    }

    /// Flush the catalog to the store.
    pub fn save_all(&mut self) -> Result<(), AppError> {
        let people = records::encode(
            self.catalog
                .people()
                .map(|p| (p.id().get(), PersonRecord::from_person(p))),
        )?;
        let movies = records::encode(
            self.catalog
                .movies()
                .map(|m| (m.id().get(), MovieRecord::from_movie(m))),
        )?;
        self.store.save(PEOPLE_KEY, &people)?;
        self.store.save(MOVIES_KEY, &movies)?;
        info!(
            people = self.catalog.person_count(),
            movies = self.catalog.movie_count(),
            "records saved"
        );
        Ok(())
    }

    /// Drop every record, in memory and in the store.
    pub fn clear_data(&mut self) -> Result<(), AppError> {
        self.catalog.clear();
        self.store.save(PEOPLE_KEY, "{}")?;
        self.store.save(MOVIES_KEY, "{}")?;
        info!("all data cleared");
        Ok(())
    }

    pub fn add_person(&mut self, slots: AddPersonSlots) -> Result<(), ConstraintViolation> {
        let person_id = slots.person_id;
        match self.catalog.add_person(slots) {
            Ok(()) => {
                info!(person_id, "person created");
                Ok(())
            }
            Err(violation) => {
                warn!(person_id, %violation, "person not created");
                Err(violation)
            }
        }
    }

    pub fn update_person(
        &mut self,
        slots: UpdatePersonSlots,
    ) -> Result<Vec<&'static str>, ConstraintViolation> {
        let person_id = slots.person_id;
        match self.catalog.update_person(slots) {
            Ok(changed) if changed.is_empty() => {
                info!(person_id, "no property value changed");
                Ok(changed)
            }
            Ok(changed) => {
                info!(person_id, properties = ?changed, "person updated");
                Ok(changed)
            }
            Err(violation) => {
                warn!(person_id, %violation, "person not updated");
                Err(violation)
            }
        }
    }

    pub fn destroy_person(&mut self, person_id: u32) -> Result<(), ConstraintViolation> {
        match self.catalog.destroy_person(person_id) {
            Ok(()) => {
                info!(person_id, "person deleted");
                Ok(())
            }
            Err(violation) => {
                warn!(person_id, %violation, "person not deleted");
                Err(violation)
            }
        }
    }

    pub fn add_movie(&mut self, slots: AddMovieSlots) -> Result<(), ConstraintViolation> {
        let movie_id = slots.movie_id;
        match self.catalog.add_movie(slots) {
            Ok(()) => {
                info!(movie_id, "movie created");
                Ok(())
            }
            Err(violation) => {
                warn!(movie_id, %violation, "movie not created");
                Err(violation)
            }
        }
    }

    pub fn update_movie(
        &mut self,
        slots: UpdateMovieSlots,
    ) -> Result<Vec<&'static str>, ConstraintViolation> {
        let movie_id = slots.movie_id;
        match self.catalog.update_movie(slots) {
            Ok(changed) if changed.is_empty() => {
                info!(movie_id, "no property value changed");
                Ok(changed)
            }
            Ok(changed) => {
                info!(movie_id, properties = ?changed, "movie updated");
                Ok(changed)
            }
            Err(violation) => {
                warn!(movie_id, %violation, "movie not updated");
                Err(violation)
            }
        }
    }

    pub fn destroy_movie(&mut self, movie_id: u32) -> Result<(), ConstraintViolation> {
        match self.catalog.destroy_movie(movie_id) {
            Ok(()) => {
                info!(movie_id, "movie deleted");
                Ok(())
            }
            Err(violation) => {
                warn!(movie_id, %violation, "movie not deleted");
                Err(violation)
            }
        }
    }
}
