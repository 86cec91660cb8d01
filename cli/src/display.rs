use costarpath_core::{Algorithm, GraphStore, PathStep, PersonId};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    let config = request.search_args.pathfinding_config();

    println!(
        "🎬 Connecting {} and {}",
        colors.person_name(&format!("\"{}\"", request.from_name)),
        colors.person_name(&format!("\"{}\"", request.to_name))
    );

    match config.algorithm {
        Algorithm::Hub => println!(
            "⚙️  Routing through hub {} (depth {})",
            colors.number(config.hub.as_str()),
            colors.number(&config.max_depth.to_string())
        ),
        Algorithm::Bfs => println!(
            "⚙️  Using breadth-first search (depth {})",
            colors.number(&config.max_depth.to_string())
        ),
    }

    if let Some(seed) = config.seed {
        println!("🎲 Seed {}", colors.number(&seed.to_string()));
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, store: &GraphStore, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.connection.path {
        Some(path) => {
            display_successful_path(path, &result.from_person, result.display_options.quiet, store, colors);
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("Not connected:"),
                colors.person_name(&format!("\"{}\"", result.from_name)),
                colors.person_name(&format!("\"{}\"", result.to_name))
            );
        }
    }

    if is_verbose {
        display_search_statistics(
            result.connection.people_explored,
            result.connection.duration_ms,
            colors,
        );
    }
}

fn display_successful_path(
    path: &[PathStep],
    source: &PersonId,
    quiet: bool,
    store: &GraphStore,
    colors: &ColorScheme,
) {
    if quiet {
        println!("{}", format_path_flow(path, source, store, colors));
        return;
    }

    println!(
        "{} {} degrees of separation.",
        colors.success("✅"),
        colors.number(&path.len().to_string())
    );
    for line in format_path_steps(path, source, store, colors) {
        println!("{}", line);
    }
}

/// One line per hop: `1: A and B starred in Title`.
pub fn format_path_steps(
    path: &[PathStep],
    source: &PersonId,
    store: &GraphStore,
    colors: &ColorScheme,
) -> Vec<String> {
    let mut previous = source;

    path.iter()
        .enumerate()
        .map(|(index, step)| {
            let line = format!(
                "{} {} and {} starred in {}",
                colors.step_number(&format!("{}:", index + 1)),
                colors.person_name(&person_name(store, previous)),
                colors.person_name(&person_name(store, &step.person)),
                colors.film_title(&film_title(store, step))
            );
            previous = &step.person;
            line
        })
        .collect()
}

/// Names along the path joined by arrows, starting with `source`.
pub fn format_path_flow(
    path: &[PathStep],
    source: &PersonId,
    store: &GraphStore,
    colors: &ColorScheme,
) -> String {
    std::iter::once(source)
        .chain(path.iter().map(|step| &step.person))
        .map(|id| {
            colors
                .person_name(&format!("\"{}\"", person_name(store, id)))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

fn person_name(store: &GraphStore, id: &PersonId) -> String {
    store
        .person(id)
        .map(|person| person.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn film_title(store: &GraphStore, step: &PathStep) -> String {
    store
        .film(&step.film)
        .map(|film| film.title.clone())
        .unwrap_or_else(|| step.film.to_string())
}

fn display_search_statistics(people_explored: usize, duration_ms: u64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} people in {} ms",
        colors.stats("📊"),
        colors.number(&format_number(people_explored)),
        colors.number(&duration_ms.to_string())
    );
}
