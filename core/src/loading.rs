use crate::error::LoadError;
use crate::graph::{FilmId, GraphStore, PersonId};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

pub const PEOPLE_FILE: &str = "people.csv";
pub const FILMS_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Deserialize)]
struct FilmRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Counts gathered while loading a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub people: usize,
    pub films: usize,
    pub links: usize,
    pub skipped_rows: usize,
    pub dropped_links: usize,
}

pub fn load_dataset(directory: &Path) -> Result<GraphStore, LoadError> {
    load_dataset_with_report(directory).map(|(store, _)| store)
}

/// Reads `people.csv`, `movies.csv` and `stars.csv` from `directory`.
///
/// Rows that do not deserialize are skipped, and star rows naming an unknown
/// person or film are dropped. Only missing files or headers are fatal.
pub fn load_dataset_with_report(directory: &Path) -> Result<(GraphStore, LoadReport), LoadError> {
    if !directory.is_dir() {
        return Err(LoadError::MissingDirectory(directory.to_path_buf()));
    }

    let mut store = GraphStore::new();
    let mut report = LoadReport::default();

    for row in read_rows::<PersonRow>(&directory.join(PEOPLE_FILE), &mut report)? {
        store.insert_person(PersonId::new(row.id), row.name, row.birth);
    }
    report.people = store.person_count();

    for row in read_rows::<FilmRow>(&directory.join(FILMS_FILE), &mut report)? {
        store.insert_film(FilmId::new(row.id), row.title, row.year);
    }
    report.films = store.film_count();

    for row in read_rows::<StarRow>(&directory.join(STARS_FILE), &mut report)? {
        let person_id = PersonId::new(row.person_id);
        let film_id = FilmId::new(row.movie_id);
        if store.link_star(&person_id, &film_id) {
            report.links += 1;
        } else {
            debug!(%person_id, %film_id, "dropping star link with unknown endpoint");
            report.dropped_links += 1;
        }
    }

    info!(
        people = report.people,
        films = report.films,
        links = report.links,
        skipped_rows = report.skipped_rows,
        dropped_links = report.dropped_links,
        "dataset loaded"
    );

    Ok((store, report))
}

fn read_rows<T: DeserializeOwned>(path: &Path, report: &mut LoadReport) -> Result<Vec<T>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reader.headers().map_err(|source| LoadError::Header {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for (line, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(error) => {
                debug!(file = %path.display(), line = line + 2, %error, "skipping malformed row");
                report.skipped_rows += 1;
            }
        }
    }

    Ok(rows)
}
