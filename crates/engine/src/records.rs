//! Serialization records
//!
//! Flat records with id references instead of object references, in the
//! camelCase field naming of the original storage format (`actorsIdRefs`,
//! `tvSeriesName`, ...). A partition serializes as a map from id string
//! to record, and loading replays the catalog operations so every record
//! is re-validated on the way in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cinelog_domain::{Movie, MovieCategory, MovieKind, Person};

use crate::catalog::{AddMovieSlots, AddPersonSlots};

/// Storage form of a person
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub person_id: u32,
    pub name: String,
    #[serde(default)]
    pub is_director: bool,
    #[serde(default)]
    pub is_actor: bool,
    /// Agent person id reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<u32>,
}

impl PersonRecord {
    pub fn from_person(person: &Person) -> Self {
        Self {
            person_id: person.id().get(),
            name: person.name().as_str().to_string(),
            is_director: person.is_director(),
            is_actor: person.is_actor(),
            agent: person.agent().map(|id| id.get()),
        }
    }

    /// Creation slots without the agent reference. Agents are assigned
    /// in a second pass once every person is loaded, so that a record
    /// may reference a person appearing later in the map.
    pub fn creation_slots(&self) -> AddPersonSlots {
        AddPersonSlots {
            person_id: self.person_id,
            name: self.name.clone(),
            director: self.is_director,
            actor: self.is_actor,
            agent: None,
        }
    }
}

/// Storage form of a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub movie_id: u32,
    pub title: String,
    pub release_date: String,
    pub director_id: u32,
    #[serde(default)]
    pub actors_id_refs: Vec<u32>,
    /// Records from before the category tag existed are plain features.
    #[serde(default = "MovieRecord::default_category")]
    pub category: MovieCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_series_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<u32>,
}

impl MovieRecord {
    fn default_category() -> MovieCategory {
        MovieCategory::Feature
    }

    pub fn from_movie(movie: &Movie) -> Self {
        let (tv_series_name, episode_no, about) = match movie.kind() {
            MovieKind::Feature => (None, None, None),
            MovieKind::TvSeriesEpisode { series, episode_no } => (
                Some(series.as_str().to_string()),
                Some(episode_no.get()),
                None,
            ),
            MovieKind::Biography { about } => (None, None, Some(about.get())),
        };
        Self {
            movie_id: movie.id().get(),
            title: movie.title().as_str().to_string(),
            release_date: movie.release_date().to_string(),
            director_id: movie.director().get(),
            actors_id_refs: movie.cast().iter().map(|id| id.get()).collect(),
            category: movie.category(),
            tv_series_name,
            episode_no,
            about,
        }
    }

    pub fn creation_slots(self) -> AddMovieSlots {
        AddMovieSlots {
            movie_id: self.movie_id,
            title: self.title,
            release_date: self.release_date,
            director_id: self.director_id,
            actor_id_refs: self.actors_id_refs,
            category: self.category,
            tv_series_name: self.tv_series_name,
            episode_no: self.episode_no,
            about: self.about,
        }
    }
}

/// Serialize a partition as a map from id string to record.
pub fn encode<R: Serialize>(
    records: impl IntoIterator<Item = (u32, R)>,
) -> Result<String, serde_json::Error> {
    let map: BTreeMap<String, R> = records
        .into_iter()
        .map(|(id, record)| (id.to_string(), record))
        .collect();
    serde_json::to_string(&map)
}

/// Deserialize a partition into raw per-record values, so one corrupt
/// record can be skipped without losing the rest.
pub fn decode(payload: &str) -> Result<BTreeMap<String, serde_json::Value>, serde_json::Error> {
    serde_json::from_str(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinelog_domain::{MovieId, MovieTitle, PersonId, PersonName};

    #[test]
    fn person_record_uses_camel_case_fields() {
        let mut person = Person::new(
            PersonId::new(2).unwrap(),
            PersonName::new("Uma Thurman").unwrap(),
        );
        person.grant_actor();
        person.set_agent(Some(PersonId::new(9).unwrap())).unwrap();
        let json = serde_json::to_string(&PersonRecord::from_person(&person)).unwrap();
        assert_eq!(
            json,
            "{\"personId\":2,\"name\":\"Uma Thurman\",\"isDirector\":false,\
             \"isActor\":true,\"agent\":9}"
        );
    }

    #[test]
    fn movie_record_serializes_cast_as_id_refs() {
        let mut movie = Movie::new(
            MovieId::new(1).unwrap(),
            MovieTitle::new("Kill Bill").unwrap(),
            "2003-10-10".parse().unwrap(),
            PersonId::new(1).unwrap(),
            MovieKind::Feature,
        );
        movie.add_cast_member(PersonId::new(2).unwrap());
        movie.add_cast_member(PersonId::new(1).unwrap());
        let record = MovieRecord::from_movie(&movie);
        assert_eq!(record.actors_id_refs, vec![1, 2]);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"actorsIdRefs\":[1,2]"));
        assert!(json.contains("\"releaseDate\":\"2003-10-10\""));
        assert!(json.contains("\"category\":\"feature\""));
        // absent variant fields are omitted entirely
        assert!(!json.contains("tvSeriesName"));
    }

    #[test]
    fn record_without_category_loads_as_feature() {
        let record: MovieRecord = serde_json::from_str(
            "{\"movieId\":1,\"title\":\"Kill Bill\",\"releaseDate\":\"2003-10-10\",\
             \"directorId\":1,\"actorsIdRefs\":[1,2]}",
        )
        .unwrap();
        assert_eq!(record.category, MovieCategory::Feature);
    }

    #[test]
    fn encode_keys_map_by_id_string() {
        let json = encode([(
            1,
            PersonRecord {
                person_id: 1,
                name: "Quentin Tarantino".into(),
                is_director: true,
                is_actor: false,
                agent: None,
            },
        )])
        .unwrap();
        let map = decode(&json).unwrap();
        assert!(map.contains_key("1"));
    }
}
