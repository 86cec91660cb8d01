use crate::search::SearchResult;
use costarpath_core::{GraphStore, PathStep, PersonId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub algorithm: String,
    pub hub: String,
    pub max_depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonStep>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStep {
    pub from: String,
    pub to: String,
    pub person_id: String,
    pub film_id: String,
    pub film_title: String,
    pub film_year: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub people_explored: usize,
}

pub fn create_json_output(result: &SearchResult, store: &GraphStore) -> JsonOutput {
    let config = result.display_options.pathfinding_config();
    let path = result.connection.path.as_deref();

    JsonOutput {
        query: JsonQuery {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
            options: JsonOptions {
                algorithm: config.algorithm.as_str().to_string(),
                hub: config.hub.to_string(),
                max_depth: config.max_depth,
                seed: config.seed,
            },
        },
        result: JsonResult {
            found: path.is_some(),
            degrees: path.map(<[PathStep]>::len),
            path: path.map(|path| json_steps(path, &result.from_person, store)),
        },
        stats: JsonStats {
            search_time_ms: result.connection.duration_ms,
            people_explored: result.connection.people_explored,
        },
    }
}

fn json_steps(path: &[PathStep], source: &PersonId, store: &GraphStore) -> Vec<JsonStep> {
    let name_of = |id: &PersonId| {
        store
            .person(id)
            .map(|person| person.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let mut previous = name_of(source);
    path.iter()
        .map(|step| {
            let current = name_of(&step.person);
            let film = store.film(&step.film);
            JsonStep {
                from: std::mem::replace(&mut previous, current.clone()),
                to: current,
                person_id: step.person.to_string(),
                film_id: step.film.to_string(),
                film_title: film
                    .map(|film| film.title.clone())
                    .unwrap_or_else(|| step.film.to_string()),
                film_year: film.map(|film| film.year.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
