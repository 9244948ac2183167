//! Movie operations: add, update (including re-typing), destroy

use cinelog_domain::{
    ConstraintViolation, EpisodeNo, Movie, MovieCategory, MovieId, MovieKind, MovieTitle, PersonId,
    ReleaseDate, SeriesName,
};

use super::{checks, Catalog};

/// Creation slots for a movie
///
/// `category` selects the variant; the variant-specific fields
/// (`tv_series_name`/`episode_no`/`about`) are mandatory for their
/// category and inadmissible for any other.
#[derive(Debug, Clone)]
pub struct AddMovieSlots {
    pub movie_id: u32,
    pub title: String,
    pub release_date: String,
    pub director_id: u32,
    pub actor_id_refs: Vec<u32>,
    pub category: MovieCategory,
    pub tv_series_name: Option<String>,
    pub episode_no: Option<u32>,
    pub about: Option<u32>,
}

impl Default for AddMovieSlots {
    fn default() -> Self {
        Self {
            movie_id: 0,
            title: String::new(),
            release_date: String::new(),
            director_id: 0,
            actor_id_refs: Vec::new(),
            category: MovieCategory::Feature,
            tv_series_name: None,
            episode_no: None,
            about: None,
        }
    }
}

/// Update slots for a movie; absent fields are left unchanged.
///
/// A `category` different from the movie's current one re-types the
/// movie: shared fields carry over, the new variant's mandatory fields
/// must be supplied.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovieSlots {
    pub movie_id: u32,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub director_id: Option<u32>,
    pub actor_id_refs_to_add: Vec<u32>,
    pub actor_id_refs_to_remove: Vec<u32>,
    pub category: Option<MovieCategory>,
    pub tv_series_name: Option<String>,
    pub episode_no: Option<u32>,
    pub about: Option<u32>,
}

fn inadmissible(field: &str, category: MovieCategory) -> ConstraintViolation {
    ConstraintViolation::out_of_range(format!("{field} does not apply to a {category} movie"))
}

impl Catalog {
    /// Create a movie record.
    ///
    /// On any violation the registry is left untouched.
    pub fn add_movie(&mut self, slots: AddMovieSlots) -> Result<(), ConstraintViolation> {
        let id = MovieId::new(slots.movie_id)?;
        checks::check_movie_id_free(self, id)?;
        let title = MovieTitle::new(slots.title)?;
        let release_date: ReleaseDate = slots.release_date.parse()?;
        let director = PersonId::new(slots.director_id)?;
        checks::check_director_ref(self, director)?;
        let kind = self.build_kind(
            slots.category,
            slots.tv_series_name,
            slots.episode_no,
            slots.about,
        )?;

        let mut movie = Movie::new(id, title, release_date, director, kind);
        for raw in slots.actor_id_refs {
            let actor = PersonId::new(raw)?;
            checks::check_actor_ref(self, actor)?;
            movie.add_cast_member(actor);
        }

        self.movies.insert(id, movie);
        Ok(())
    }

    /// Update a movie record, all-or-nothing.
    ///
    /// Cast mutation is set-like: adding a present id and removing an
    /// absent one are tolerated no-ops. Returns the names of the
    /// properties that actually changed (informational only).
    pub fn update_movie(
        &mut self,
        slots: UpdateMovieSlots,
    ) -> Result<Vec<&'static str>, ConstraintViolation> {
        let id = MovieId::new(slots.movie_id)?;
        let mut movie = self
            .movies
            .get(&id)
            .cloned()
            .ok_or_else(|| ConstraintViolation::not_found("movie", id))?;
        let mut changed = Vec::new();

        if let Some(title_raw) = slots.title {
            let title = MovieTitle::new(title_raw)?;
            if movie.title() != &title {
                movie.set_title(title);
                changed.push("title");
            }
        }
        if let Some(date_raw) = slots.release_date {
            let release_date: ReleaseDate = date_raw.parse()?;
            if movie.release_date() != release_date {
                movie.set_release_date(release_date);
                changed.push("releaseDate");
            }
        }
        if let Some(director_raw) = slots.director_id {
            let director = PersonId::new(director_raw)?;
            checks::check_director_ref(self, director)?;
            if movie.director() != director {
                movie.set_director(director);
                changed.push("directorId");
            }
        }

        let category = slots.category.unwrap_or_else(|| movie.category());
        if category != movie.category() {
            // Re-typing: shared fields stay, the variant tag is rebuilt
            // from the supplied slots.
            let supplied_series = slots.tv_series_name.is_some();
            let supplied_no = slots.episode_no.is_some();
            let supplied_about = slots.about.is_some();
            let kind = self.build_kind(category, slots.tv_series_name, slots.episode_no, slots.about)?;
            movie.retype(kind);
            changed.push("category");
            if supplied_series {
                changed.push("tvSeriesName");
            }
            if supplied_no {
                changed.push("episodeNo");
            }
            if supplied_about {
                changed.push("about");
            }
        } else {
            let labels =
                self.update_kind(&mut movie, slots.tv_series_name, slots.episode_no, slots.about)?;
            changed.extend(labels);
        }

        let mut added = false;
        for raw in slots.actor_id_refs_to_add {
            let actor = PersonId::new(raw)?;
            checks::check_actor_ref(self, actor)?;
            added |= movie.add_cast_member(actor);
        }
        if added {
            changed.push("actors(added)");
        }
        let mut removed = false;
        for raw in slots.actor_id_refs_to_remove {
            let actor = PersonId::new(raw)?;
            removed |= movie.remove_cast_member(actor);
        }
        if removed {
            changed.push("actors(removed)");
        }

        self.movies.insert(id, movie);
        Ok(changed)
    }

    /// Destroy a movie record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id does not resolve; callers treat this
    /// as a report, not a failure.
    pub fn destroy_movie(&mut self, movie_id: u32) -> Result<(), ConstraintViolation> {
        let id = MovieId::new(movie_id)?;
        if self.movies.remove(&id).is_none() {
            return Err(ConstraintViolation::not_found("movie", id));
        }
        Ok(())
    }

    /// Build a variant tag from raw slots, enforcing that each field is
    /// mandatory for its own category and inadmissible for any other.
    fn build_kind(
        &self,
        category: MovieCategory,
        tv_series_name: Option<String>,
        episode_no: Option<u32>,
        about: Option<u32>,
    ) -> Result<MovieKind, ConstraintViolation> {
        match category {
            MovieCategory::Feature => {
                if tv_series_name.is_some() {
                    return Err(inadmissible("tvSeriesName", category));
                }
                if episode_no.is_some() {
                    return Err(inadmissible("episodeNo", category));
                }
                if about.is_some() {
                    return Err(inadmissible("about", category));
                }
                Ok(MovieKind::Feature)
            }
            MovieCategory::TvSeriesEpisode => {
                if about.is_some() {
                    return Err(inadmissible("about", category));
                }
                let series = SeriesName::new(tv_series_name.ok_or_else(|| {
                    ConstraintViolation::mandatory("A TV series name must be provided")
                })?)?;
                let episode_no = EpisodeNo::new(episode_no.ok_or_else(|| {
                    ConstraintViolation::mandatory("An episode number must be provided")
                })?)?;
                Ok(MovieKind::TvSeriesEpisode { series, episode_no })
            }
            MovieCategory::Biography => {
                if tv_series_name.is_some() {
                    return Err(inadmissible("tvSeriesName", category));
                }
                if episode_no.is_some() {
                    return Err(inadmissible("episodeNo", category));
                }
                let about = PersonId::new(about.ok_or_else(|| {
                    ConstraintViolation::mandatory(
                        "The person this biography is about must be provided",
                    )
                })?)?;
                checks::check_subject_ref(self, about)?;
                Ok(MovieKind::Biography { about })
            }
        }
    }

    /// Apply variant-field updates within the movie's current category.
    fn update_kind(
        &self,
        movie: &mut Movie,
        tv_series_name: Option<String>,
        episode_no: Option<u32>,
        about: Option<u32>,
    ) -> Result<Vec<&'static str>, ConstraintViolation> {
        let category = movie.category();
        match movie.kind().clone() {
            MovieKind::Feature => {
                if tv_series_name.is_some() {
                    return Err(inadmissible("tvSeriesName", category));
                }
                if episode_no.is_some() {
                    return Err(inadmissible("episodeNo", category));
                }
                if about.is_some() {
                    return Err(inadmissible("about", category));
                }
                Ok(Vec::new())
            }
            MovieKind::TvSeriesEpisode {
                mut series,
                episode_no: mut current_no,
            } => {
                if about.is_some() {
                    return Err(inadmissible("about", category));
                }
                let mut labels = Vec::new();
                if let Some(series_raw) = tv_series_name {
                    let new_series = SeriesName::new(series_raw)?;
                    if new_series != series {
                        series = new_series;
                        labels.push("tvSeriesName");
                    }
                }
                if let Some(no_raw) = episode_no {
                    let new_no = EpisodeNo::new(no_raw)?;
                    if new_no != current_no {
                        current_no = new_no;
                        labels.push("episodeNo");
                    }
                }
                if !labels.is_empty() {
                    movie.retype(MovieKind::TvSeriesEpisode {
                        series,
                        episode_no: current_no,
                    });
                }
                Ok(labels)
            }
            MovieKind::Biography { about: current } => {
                if tv_series_name.is_some() {
                    return Err(inadmissible("tvSeriesName", category));
                }
                if episode_no.is_some() {
                    return Err(inadmissible("episodeNo", category));
                }
                if let Some(about_raw) = about {
                    let subject = PersonId::new(about_raw)?;
                    checks::check_subject_ref(self, subject)?;
                    if subject != current {
                        movie.retype(MovieKind::Biography { about: subject });
                        return Ok(vec!["about"]);
                    }
                }
                Ok(Vec::new())
            }
        }
    }
}
