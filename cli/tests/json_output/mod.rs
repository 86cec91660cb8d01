use clap::Parser;
use costarpath::json_output::{JsonOutput, create_json_output};
use costarpath::{Args, SearchResult};
use costarpath_core::{ConnectionResult, FilmId, GraphStore, PathStep, PersonId};

fn create_test_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.insert_person(PersonId::new("1"), "Alice", "1970");
    store.insert_person(PersonId::new("2"), "Bob", "1975");
    store.insert_person(PersonId::new("102"), "Kevin Bacon", "1958");
    store.insert_film(FilmId::new("F1"), "First Film", "1990");
    store.insert_film(FilmId::new("F2"), "Second Film", "1995");
    store
}

fn create_result(path: Option<Vec<PathStep>>) -> SearchResult {
    SearchResult {
        connection: ConnectionResult {
            path,
            people_explored: 1234,
            duration_ms: 15,
        },
        from_person: PersonId::new("1"),
        from_name: "Alice".to_string(),
        to_name: "Bob".to_string(),
        display_options: Args::parse_from(["costarpath", "Alice", "Bob", "--json", "--seed", "9"]),
    }
}

#[test]
fn test_json_output_with_path() {
    let store = create_test_store();
    let result = create_result(Some(vec![
        PathStep::new(FilmId::new("F1"), PersonId::new("102")),
        PathStep::new(FilmId::new("F2"), PersonId::new("2")),
    ]));

    let json_output = create_json_output(&result, &store);

    assert_eq!(json_output.query.from, "Alice");
    assert_eq!(json_output.query.to, "Bob");
    assert_eq!(json_output.query.options.algorithm, "hub");
    assert_eq!(json_output.query.options.hub, "102");
    assert_eq!(json_output.query.options.max_depth, 6);
    assert_eq!(json_output.query.options.seed, Some(9));

    assert!(json_output.result.found);
    assert_eq!(json_output.result.degrees, Some(2));
    let path = json_output.result.path.unwrap();
    assert_eq!(path.len(), 2);

    assert_eq!(path[0].from, "Alice");
    assert_eq!(path[0].to, "Kevin Bacon");
    assert_eq!(path[0].film_title, "First Film");
    assert_eq!(path[0].film_year, "1990");

    assert_eq!(path[1].from, "Kevin Bacon");
    assert_eq!(path[1].to, "Bob");
    assert_eq!(path[1].person_id, "2");
    assert_eq!(path[1].film_id, "F2");

    assert_eq!(json_output.stats.people_explored, 1234);
    assert_eq!(json_output.stats.search_time_ms, 15);
}

#[test]
fn test_json_output_not_connected() {
    let store = create_test_store();
    let result = create_result(None);

    let json_output = create_json_output(&result, &store);

    assert!(!json_output.result.found);
    assert!(json_output.result.degrees.is_none());
    assert!(json_output.result.path.is_none());

    let serialized = serde_json::to_string(&json_output).unwrap();
    assert!(!serialized.contains("\"path\""));
    assert!(!serialized.contains("\"degrees\""));

    let parsed: JsonOutput = serde_json::from_str(&serialized).unwrap();
    assert!(!parsed.result.found);
    assert_eq!(parsed.stats.people_explored, 1234);
}
