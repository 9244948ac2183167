//! Person entity with a non-exclusive role set
//!
//! The original model kept directors and actors in separate collections
//! that had to be synchronized with the base person collection by hand.
//! Here a person is one record carrying role tags: "is this person a
//! director" is a query on the record, and an id can hold both roles at
//! once without existing twice.

use crate::error::ConstraintViolation;
use crate::ids::PersonId;
use crate::value_objects::PersonName;

/// Actor-specific state: an optional agent, referenced by person id.
///
/// The original stored the agent by display name; here it is a typed id
/// reference, resolved to a name only at presentation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorRole {
    agent: Option<PersonId>,
}

/// The non-exclusive roles a person may hold
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRoles {
    director: bool,
    actor: Option<ActorRole>,
}

/// A person known to the catalog
///
/// # Invariants
///
/// - `id` is positive (enforced by `PersonId`) and immutable
/// - `name` is non-empty and trimmed (enforced by `PersonName`)
/// - an agent reference only exists on a person holding the actor role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: PersonName,
    roles: PersonRoles,
}

impl Person {
    /// Create a plain person with no roles.
    pub fn new(id: PersonId, name: PersonName) -> Self {
        Self {
            id,
            name,
            roles: PersonRoles::default(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn set_name(&mut self, name: PersonName) {
        self.name = name;
    }

    pub fn is_director(&self) -> bool {
        self.roles.director
    }

    pub fn is_actor(&self) -> bool {
        self.roles.actor.is_some()
    }

    /// The agent reference, if this person is an actor with an agent.
    pub fn agent(&self) -> Option<PersonId> {
        self.roles.actor.as_ref().and_then(|role| role.agent)
    }

    pub fn grant_director(&mut self) {
        self.roles.director = true;
    }

    pub fn revoke_director(&mut self) {
        self.roles.director = false;
    }

    /// Grant the actor role. Keeps an already-assigned agent.
    pub fn grant_actor(&mut self) {
        if self.roles.actor.is_none() {
            self.roles.actor = Some(ActorRole::default());
        }
    }

    /// Revoke the actor role, discarding any agent reference.
    pub fn revoke_actor(&mut self) {
        self.roles.actor = None;
    }

    /// Assign or clear the agent reference.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation::OutOfRange` when assigning an agent
    /// to a person without the actor role. Clearing is always allowed.
    pub fn set_agent(&mut self, agent: Option<PersonId>) -> Result<(), ConstraintViolation> {
        match (&mut self.roles.actor, agent) {
            (Some(role), agent) => {
                role.agent = agent;
                Ok(())
            }
            (None, None) => Ok(()),
            (None, Some(_)) => Err(ConstraintViolation::out_of_range(
                "Only a person with the actor role can have an agent",
            )),
        }
    }

    /// Clear the agent reference if it points at `target`.
    ///
    /// Returns `true` when a reference was cleared. Used by the person
    /// deletion cascade.
    pub fn clear_agent_if(&mut self, target: PersonId) -> bool {
        if let Some(role) = &mut self.roles.actor {
            if role.agent == Some(target) {
                role.agent = None;
                return true;
            }
        }
        false
    }
}
