use costarpath_core::{ConnectionResult, GraphStore, PersonId, RandomChooser, find_connection};
use std::io::{BufRead, Write};

use crate::args::Args;

pub struct SearchRequest {
    pub from_person: PersonId,
    pub to_person: PersonId,
    pub from_name: String,
    pub to_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub connection: ConnectionResult,
    pub from_person: PersonId,
    pub from_name: String,
    pub to_name: String,
    pub display_options: Args,
}

/// Resolves `name` to one person id, asking on `output` and reading the answer
/// from `input` when several people share the name.
pub fn resolve_person<R: BufRead, W: Write>(
    name: &str,
    store: &GraphStore,
    input: &mut R,
    output: &mut W,
) -> Result<PersonId, String> {
    let person_ids = store.person_ids_for_name(name);

    if person_ids.len() <= 1 {
        return person_ids
            .into_iter()
            .next()
            .ok_or_else(|| format!("Person '{}' not found", name));
    }

    let io_error = |error: std::io::Error| format!("Could not ask which '{}': {}", name, error);

    writeln!(output, "Which '{}'?", name).map_err(io_error)?;
    for person_id in &person_ids {
        if let Some(person) = store.person(person_id) {
            writeln!(
                output,
                "ID: {}, Name: {}, Birth: {}",
                person_id, person.name, person.birth
            )
            .map_err(io_error)?;
        }
    }
    write!(output, "Intended Person ID: ").map_err(io_error)?;
    output.flush().map_err(io_error)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(io_error)?;
    let chosen = PersonId::new(answer.trim());

    if person_ids.contains(&chosen) {
        Ok(chosen)
    } else {
        Err(format!("'{}' is not one of the listed ids for '{}'", chosen, name))
    }
}

pub fn create_search_request<R: BufRead, W: Write>(
    args: Args,
    store: &GraphStore,
    input: &mut R,
    output: &mut W,
) -> Result<SearchRequest, String> {
    let from_person = resolve_person(&args.person1, store, input, output)?;
    let to_person = resolve_person(&args.person2, store, input, output)?;

    let display_name = |id: &PersonId| {
        store
            .person(id)
            .map(|person| person.name.clone())
            .unwrap_or_else(|| id.to_string())
    };
    let from_name = display_name(&from_person);
    let to_name = display_name(&to_person);

    Ok(SearchRequest {
        from_person,
        to_person,
        from_name,
        to_name,
        search_args: args,
    })
}

pub fn execute_search(request: SearchRequest, store: &GraphStore) -> SearchResult {
    let config = request.search_args.pathfinding_config();
    let mut chooser = RandomChooser::from_seed_option(config.seed);

    let connection = find_connection(
        store,
        &request.from_person,
        &request.to_person,
        &config,
        &mut chooser,
    );

    SearchResult {
        connection,
        from_person: request.from_person,
        from_name: request.from_name,
        to_name: request.to_name,
        display_options: request.search_args,
    }
}
