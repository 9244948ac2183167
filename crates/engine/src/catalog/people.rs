//! Person operations: add, update, destroy
//!
//! Slots records carry raw form values (integers and strings); every
//! field goes through its validator before anything is committed.

use cinelog_domain::{ConstraintViolation, Person, PersonId, PersonName};

use super::{cascade, checks, Catalog};

/// Creation slots for a person
#[derive(Debug, Clone, Default)]
pub struct AddPersonSlots {
    pub person_id: u32,
    pub name: String,
    pub director: bool,
    pub actor: bool,
    /// Agent person id; only admissible together with the actor role
    pub agent: Option<u32>,
}

/// Update slots for a person; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonSlots {
    pub person_id: u32,
    pub name: Option<String>,
    pub director: Option<bool>,
    pub actor: Option<bool>,
    pub agent: Option<AgentSlot>,
}

/// Requested change to the agent reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSlot {
    Assign(u32),
    Clear,
}

impl Catalog {
    /// Create a person record.
    ///
    /// On any violation the registry is left untouched.
    pub fn add_person(&mut self, slots: AddPersonSlots) -> Result<(), ConstraintViolation> {
        let id = PersonId::new(slots.person_id)?;
        checks::check_person_id_free(self, id)?;
        let name = PersonName::new(slots.name)?;

        let mut person = Person::new(id, name);
        if slots.director {
            person.grant_director();
        }
        if slots.actor {
            person.grant_actor();
        }
        if let Some(agent_raw) = slots.agent {
            let agent = PersonId::new(agent_raw)?;
            checks::check_agent_ref(self, agent)?;
            person.set_agent(Some(agent))?;
        }

        self.people.insert(id, person);
        Ok(())
    }

    /// Update a person record, all-or-nothing.
    ///
    /// Every present field is validated against a staged copy; the
    /// registry is only touched once the whole update has passed.
    /// Returns the names of the properties that actually changed
    /// (informational only).
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id does not resolve
    /// - `DanglingReference` when revoking the director role of a person
    ///   that movies still reference: re-validating those movies'
    ///   director references against the staged person set fails
    /// - any field-level violation, with the registry unchanged
    pub fn update_person(
        &mut self,
        slots: UpdatePersonSlots,
    ) -> Result<Vec<&'static str>, ConstraintViolation> {
        let id = PersonId::new(slots.person_id)?;
        let mut person = self
            .people
            .get(&id)
            .cloned()
            .ok_or_else(|| ConstraintViolation::not_found("person", id))?;
        let was_actor = person.is_actor();
        let mut changed = Vec::new();

        if let Some(name_raw) = slots.name {
            let name = PersonName::new(name_raw)?;
            if person.name() != &name {
                person.set_name(name);
                changed.push("name");
            }
        }
        if let Some(director) = slots.director {
            if person.is_director() != director {
                if !director && self.movies_directed_by(id).next().is_some() {
                    return Err(ConstraintViolation::dangling("director", id));
                }
                if director {
                    person.grant_director();
                } else {
                    person.revoke_director();
                }
                changed.push("director");
            }
        }
        if let Some(actor) = slots.actor {
            if person.is_actor() != actor {
                if actor {
                    person.grant_actor();
                } else {
                    person.revoke_actor();
                }
                changed.push("actor");
            }
        }
        if let Some(agent_slot) = slots.agent {
            let agent = match agent_slot {
                AgentSlot::Assign(raw) => {
                    let agent = PersonId::new(raw)?;
                    checks::check_agent_ref(self, agent)?;
                    Some(agent)
                }
                AgentSlot::Clear => None,
            };
            if person.agent() != agent {
                person.set_agent(agent)?;
                changed.push("agent");
            }
        }

        // Commit. Revoking the actor role detaches the person from every
        // cast, the same detach a person deletion performs.
        let actor_revoked = was_actor && !person.is_actor();
        self.people.insert(id, person);
        if actor_revoked {
            for movie in self.movies.values_mut() {
                movie.remove_cast_member(id);
            }
        }
        Ok(changed)
    }

    /// Destroy a person record with the full referential cascade:
    /// agent references are cleared, movies they directed and
    /// biographies about them are destroyed, and the person leaves
    /// every remaining cast.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id does not resolve; callers treat this
    /// as a report, not a failure.
    pub fn destroy_person(&mut self, person_id: u32) -> Result<(), ConstraintViolation> {
        let id = PersonId::new(person_id)?;
        if !self.people.contains_key(&id) {
            return Err(ConstraintViolation::not_found("person", id));
        }
        cascade::remove_person(self, id);
        Ok(())
    }
}
