//! Cinelog - movie catalog over a file-backed store
//!
//! This binary is the *composition root*: it wires a [`FileStore`] to a
//! [`MovieDatabase`], materializes the catalog, seeds demo data on first
//! run, prints a summary, and flushes everything back on exit.

use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cinelog_engine::{AddMovieSlots, AddPersonSlots, FileStore, MovieDatabase};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data_dir = env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("opening store directory {data_dir:?}"))?;

    let mut db = MovieDatabase::new(Box::new(store));
    db.retrieve_all().context("loading catalog")?;

    if db.catalog().person_count() == 0 && db.catalog().movie_count() == 0 {
        info!("empty catalog, seeding demo data");
        seed(&mut db)?;
    }

    print_summary(&db);

    db.save_all().context("saving catalog")?;
    Ok(())
}

/// The demo dataset of the original application.
fn seed(db: &mut MovieDatabase) -> anyhow::Result<()> {
    db.add_person(AddPersonSlots {
        person_id: 1,
        name: "Quentin Tarantino".into(),
        director: true,
        actor: true,
        ..Default::default()
    })?;
    db.add_person(AddPersonSlots {
        person_id: 2,
        name: "Uma Thurman".into(),
        actor: true,
        ..Default::default()
    })?;
    db.add_movie(AddMovieSlots {
        movie_id: 1,
        title: "Kill Bill".into(),
        release_date: "2003-10-10".into(),
        director_id: 1,
        actor_id_refs: vec![1, 2],
        ..Default::default()
    })?;
    db.add_movie(AddMovieSlots {
        movie_id: 2,
        title: "Pulp Fiction".into(),
        release_date: "1994-10-14".into(),
        director_id: 1,
        actor_id_refs: vec![2],
        ..Default::default()
    })?;
    Ok(())
}

fn print_summary(db: &MovieDatabase) {
    let catalog = db.catalog();
    println!(
        "{} people ({} directors, {} actors), {} movies",
        catalog.person_count(),
        catalog.directors().count(),
        catalog.actors().count(),
        catalog.movie_count()
    );
    for movie in catalog.movies() {
        let director = catalog
            .person(movie.director())
            .map(|p| p.name().as_str().to_string())
            .unwrap_or_else(|| movie.director().to_string());
        let cast: Vec<String> = movie
            .cast()
            .iter()
            .filter_map(|id| catalog.person(*id))
            .map(|p| p.name().as_str().to_string())
            .collect();
        println!(
            "  [{}] {} ({}, dir. {}) cast: {}",
            movie.id(),
            movie.title(),
            movie.release_date(),
            director,
            cast.join(", ")
        );
    }
}
