//! Store round-trip tests for the application façade

use cinelog_engine::{
    AddMovieSlots, AddPersonSlots, MemoryStore, MovieDatabase, Store, MOVIES_KEY, PEOPLE_KEY,
};

use cinelog_domain::{MovieCategory, MovieId, PersonId};

fn pid(raw: u32) -> PersonId {
    PersonId::new(raw).unwrap()
}

fn mid(raw: u32) -> MovieId {
    MovieId::new(raw).unwrap()
}

/// Build a populated database over a memory store.
fn populated() -> MovieDatabase {
    let mut db = MovieDatabase::new(Box::new(MemoryStore::new()));
    db.add_person(AddPersonSlots {
        person_id: 1,
        name: "Quentin Tarantino".into(),
        director: true,
        actor: true,
        ..Default::default()
    })
    .unwrap();
    db.add_person(AddPersonSlots {
        person_id: 2,
        name: "Uma Thurman".into(),
        actor: true,
        agent: Some(1),
        ..Default::default()
    })
    .unwrap();
    db.add_movie(AddMovieSlots {
        movie_id: 1,
        title: "Kill Bill".into(),
        release_date: "2003-10-10".into(),
        director_id: 1,
        actor_id_refs: vec![1, 2],
        ..Default::default()
    })
    .unwrap();
    db.add_movie(AddMovieSlots {
        movie_id: 2,
        title: "The Director Himself".into(),
        release_date: "2019-07-26".into(),
        director_id: 1,
        category: MovieCategory::Biography,
        about: Some(1),
        ..Default::default()
    })
    .unwrap();
    db
}

/// Save a database, then rebuild a fresh one from the same store state.
fn save_and_reload(mut db: MovieDatabase) -> MovieDatabase {
    db.save_all().unwrap();
    let mut store = MemoryStore::new();
    for key in [PEOPLE_KEY, MOVIES_KEY] {
        let payload = db.store().load(key).unwrap().expect("saved payload");
        store.save(key, &payload).unwrap();
    }
    let mut reloaded = MovieDatabase::new(Box::new(store));
    reloaded.retrieve_all().unwrap();
    reloaded
}

#[test]
fn round_trip_reconstructs_equivalent_entities() {
    let db = populated();
    let reloaded = save_and_reload(db);
    let catalog = reloaded.catalog();

    assert_eq!(catalog.person_count(), 2);
    assert_eq!(catalog.movie_count(), 2);

    let tarantino = catalog.person(pid(1)).unwrap();
    assert!(tarantino.is_director() && tarantino.is_actor());
    let thurman = catalog.person(pid(2)).unwrap();
    assert_eq!(thurman.name().as_str(), "Uma Thurman");
    assert_eq!(thurman.agent(), Some(pid(1)));

    let kill_bill = catalog.movie(mid(1)).unwrap();
    assert_eq!(kill_bill.title().as_str(), "Kill Bill");
    assert_eq!(kill_bill.release_date().to_string(), "2003-10-10");
    assert_eq!(kill_bill.director(), pid(1));
    assert_eq!(
        kill_bill.cast().iter().copied().collect::<Vec<_>>(),
        vec![pid(1), pid(2)]
    );

    let biography = catalog.movie(mid(2)).unwrap();
    assert_eq!(biography.category(), MovieCategory::Biography);
}

#[test]
fn corrupt_person_record_is_skipped_not_fatal() {
    let mut store = MemoryStore::new();
    store
        .save(
            PEOPLE_KEY,
            "{\"1\":{\"personId\":1,\"name\":\"Quentin Tarantino\",\"isDirector\":true},\
             \"2\":{\"personId\":2,\"name\":\"\"},\
             \"3\":{\"bogus\":true}}",
        )
        .unwrap();
    let mut db = MovieDatabase::new(Box::new(store));
    db.retrieve_all().unwrap();
    // record 2 fails validation, record 3 is malformed; record 1 loads
    assert_eq!(db.catalog().person_count(), 1);
    assert!(db.catalog().person(pid(1)).is_some());
}

#[test]
fn movie_with_dangling_director_is_skipped_on_load() {
    let mut store = MemoryStore::new();
    store
        .save(
            MOVIES_KEY,
            "{\"1\":{\"movieId\":1,\"title\":\"Orphan\",\"releaseDate\":\"2000-01-02\",\
             \"directorId\":9}}",
        )
        .unwrap();
    let mut db = MovieDatabase::new(Box::new(store));
    db.retrieve_all().unwrap();
    assert_eq!(db.catalog().movie_count(), 0);
}

#[test]
fn agent_forward_reference_resolves_across_the_map() {
    // person 1 references person 9, stored later in the map
    let mut store = MemoryStore::new();
    store
        .save(
            PEOPLE_KEY,
            "{\"1\":{\"personId\":1,\"name\":\"Uma Thurman\",\"isActor\":true,\"agent\":9},\
             \"9\":{\"personId\":9,\"name\":\"Gabrielle Kachman\"}}",
        )
        .unwrap();
    let mut db = MovieDatabase::new(Box::new(store));
    db.retrieve_all().unwrap();
    assert_eq!(db.catalog().person(pid(1)).unwrap().agent(), Some(pid(9)));
}

#[test]
fn clear_data_empties_catalog_and_store() {
    let mut db = populated();
    db.save_all().unwrap();
    db.clear_data().unwrap();
    assert_eq!(db.catalog().person_count(), 0);
    assert_eq!(db.catalog().movie_count(), 0);
    let reloaded = save_and_reload(db);
    assert_eq!(reloaded.catalog().person_count(), 0);
    assert_eq!(reloaded.catalog().movie_count(), 0);
}

#[test]
fn failed_load_leaves_the_catalog_unchanged() {
    // valid people partition, unparseable movie partition: the load must
    // fail as a whole without committing the people already decoded
    let mut store = MemoryStore::new();
    store
        .save(
            PEOPLE_KEY,
            "{\"1\":{\"personId\":1,\"name\":\"Quentin Tarantino\",\"isDirector\":true}}",
        )
        .unwrap();
    store.save(MOVIES_KEY, "not json").unwrap();

    let mut db = MovieDatabase::new(Box::new(store));
    db.add_person(AddPersonSlots {
        person_id: 7,
        name: "Uma Thurman".into(),
        actor: true,
        ..Default::default()
    })
    .unwrap();

    assert!(db.retrieve_all().is_err());
    assert_eq!(db.catalog().person_count(), 1);
    assert!(db.catalog().person(pid(7)).is_some());
    assert!(db.catalog().person(pid(1)).is_none());
}

#[test]
fn empty_store_loads_an_empty_catalog() {
    let mut db = MovieDatabase::new(Box::new(MemoryStore::new()));
    db.retrieve_all().unwrap();
    assert_eq!(db.catalog().person_count(), 0);
    assert_eq!(db.catalog().movie_count(), 0);
}
