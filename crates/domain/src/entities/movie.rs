//! Movie entity with a closed variant tag
//!
//! The original model decided subtype behavior with runtime `instanceof`
//! checks across parallel collections. Here a movie is one record whose
//! variant-specific fields live in a closed [`MovieKind`] enum, so
//! category membership is pattern matching and re-typing is swapping the
//! tag while the shared fields stay in place.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;
use crate::ids::{MovieId, PersonId};
use crate::value_objects::{EpisodeNo, MovieTitle, ReleaseDate, SeriesName};

/// Variant-specific movie state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieKind {
    /// A plain feature film with no extra fields
    Feature,
    /// One episode of a TV series
    TvSeriesEpisode {
        series: SeriesName,
        episode_no: EpisodeNo,
    },
    /// A biography about an existing person
    Biography { about: PersonId },
}

impl MovieKind {
    /// The field-less discriminant of this variant.
    pub fn category(&self) -> MovieCategory {
        match self {
            Self::Feature => MovieCategory::Feature,
            Self::TvSeriesEpisode { .. } => MovieCategory::TvSeriesEpisode,
            Self::Biography { .. } => MovieCategory::Biography,
        }
    }
}

/// The category a movie belongs to, without variant payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieCategory {
    Feature,
    TvSeriesEpisode,
    Biography,
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feature => write!(f, "feature"),
            Self::TvSeriesEpisode => write!(f, "tvSeriesEpisode"),
            Self::Biography => write!(f, "biography"),
        }
    }
}

impl FromStr for MovieCategory {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(Self::Feature),
            "tvSeriesEpisode" => Ok(Self::TvSeriesEpisode),
            "biography" => Ok(Self::Biography),
            _ => Err(ConstraintViolation::pattern(format!(
                "Unknown movie category: {s}"
            ))),
        }
    }
}

/// A movie known to the catalog
///
/// # Invariants
///
/// - `id` is positive (enforced by `MovieId`) and immutable
/// - `title` is non-empty (enforced by `MovieTitle`)
/// - `release_date` is chronologically valid and on or after 1895-12-28
/// - `director` and every cast member resolve to existing persons with
///   the matching role; the registry enforces this, the entity only
///   carries the references
/// - the cast is a set: adding a present id and removing an absent one
///   are no-ops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    id: MovieId,
    title: MovieTitle,
    release_date: ReleaseDate,
    director: PersonId,
    cast: BTreeSet<PersonId>,
    kind: MovieKind,
}

impl Movie {
    pub fn new(
        id: MovieId,
        title: MovieTitle,
        release_date: ReleaseDate,
        director: PersonId,
        kind: MovieKind,
    ) -> Self {
        Self {
            id,
            title,
            release_date,
            director,
            cast: BTreeSet::new(),
            kind,
        }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    pub fn set_title(&mut self, title: MovieTitle) {
        self.title = title;
    }

    pub fn release_date(&self) -> ReleaseDate {
        self.release_date
    }

    pub fn set_release_date(&mut self, date: ReleaseDate) {
        self.release_date = date;
    }

    pub fn director(&self) -> PersonId {
        self.director
    }

    pub fn set_director(&mut self, director: PersonId) {
        self.director = director;
    }

    pub fn cast(&self) -> &BTreeSet<PersonId> {
        &self.cast
    }

    /// Add an actor reference. Idempotent: returns `false` when the id
    /// was already in the cast.
    pub fn add_cast_member(&mut self, actor: PersonId) -> bool {
        self.cast.insert(actor)
    }

    /// Remove an actor reference. Tolerant of absent ids: returns
    /// `false` when there was nothing to remove.
    pub fn remove_cast_member(&mut self, actor: PersonId) -> bool {
        self.cast.remove(&actor)
    }

    pub fn kind(&self) -> &MovieKind {
        &self.kind
    }

    pub fn category(&self) -> MovieCategory {
        self.kind.category()
    }

    /// Replace the variant tag, preserving id, title, release date,
    /// director, and cast. This is the re-typing step of a
    /// category-changing update.
    pub fn retype(&mut self, kind: MovieKind) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32) -> Movie {
        Movie::new(
            MovieId::new(id).unwrap(),
            MovieTitle::new("Kill Bill").unwrap(),
            "2003-10-10".parse().unwrap(),
            PersonId::new(1).unwrap(),
            MovieKind::Feature,
        )
    }

    #[test]
    fn cast_add_is_idempotent() {
        let mut m = movie(1);
        let actor = PersonId::new(2).unwrap();
        assert!(m.add_cast_member(actor));
        assert!(!m.add_cast_member(actor));
        assert_eq!(m.cast().len(), 1);
    }

    #[test]
    fn cast_remove_tolerates_absent_id() {
        let mut m = movie(1);
        let actor = PersonId::new(2).unwrap();
        assert!(!m.remove_cast_member(actor));
        m.add_cast_member(actor);
        assert!(m.remove_cast_member(actor));
        assert!(m.cast().is_empty());
    }

    #[test]
    fn retype_preserves_shared_fields() {
        let mut m = movie(1);
        m.add_cast_member(PersonId::new(2).unwrap());
        let before = m.clone();
        m.retype(MovieKind::TvSeriesEpisode {
            series: SeriesName::new("Twin Peaks").unwrap(),
            episode_no: EpisodeNo::new(3).unwrap(),
        });
        assert_eq!(m.category(), MovieCategory::TvSeriesEpisode);
        assert_eq!(m.id(), before.id());
        assert_eq!(m.title(), before.title());
        assert_eq!(m.release_date(), before.release_date());
        assert_eq!(m.director(), before.director());
        assert_eq!(m.cast(), before.cast());
    }

    #[test]
    fn category_display_round_trips() {
        for category in [
            MovieCategory::Feature,
            MovieCategory::TvSeriesEpisode,
            MovieCategory::Biography,
        ] {
            let back: MovieCategory = category.to_string().parse().unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn unknown_category_rejected() {
        let err = "documentary".parse::<MovieCategory>().unwrap_err();
        assert!(matches!(err, ConstraintViolation::PatternMismatch(_)));
    }
}
