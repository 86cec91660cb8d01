use costarpath::colors::ColorScheme;
use costarpath::display::{format_path_flow, format_path_steps};
use costarpath_core::{FilmId, GraphStore, PathStep, PersonId};

fn create_test_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.insert_person(PersonId::new("1"), "Alice", "");
    store.insert_person(PersonId::new("2"), "Bob", "");
    store.insert_person(PersonId::new("102"), "Kevin", "");
    store.insert_film(FilmId::new("F1"), "First Film", "1990");
    store.insert_film(FilmId::new("F2"), "Second Film", "1995");
    store
}

fn create_test_path() -> Vec<PathStep> {
    vec![
        PathStep::new(FilmId::new("F1"), PersonId::new("102")),
        PathStep::new(FilmId::new("F2"), PersonId::new("2")),
    ]
}

#[test]
fn test_format_path_steps() {
    let store = create_test_store();
    let colors = ColorScheme::new(false);

    let lines = format_path_steps(&create_test_path(), &PersonId::new("1"), &store, &colors);

    assert_eq!(
        lines,
        vec![
            "1: Alice and Kevin starred in First Film",
            "2: Kevin and Bob starred in Second Film",
        ]
    );
}

#[test]
fn test_format_path_flow() {
    let store = create_test_store();
    let colors = ColorScheme::new(false);

    let flow = format_path_flow(&create_test_path(), &PersonId::new("1"), &store, &colors);

    assert_eq!(flow, r#""Alice" → "Kevin" → "Bob""#);
}

#[test]
fn test_unknown_records_fall_back_to_ids() {
    let store = create_test_store();
    let colors = ColorScheme::new(false);
    let path = vec![PathStep::new(FilmId::new("F9"), PersonId::new("9"))];

    let lines = format_path_steps(&path, &PersonId::new("1"), &store, &colors);

    assert_eq!(lines, vec!["1: Alice and 9 starred in F9"]);
}

#[test]
fn test_empty_path() {
    let store = create_test_store();
    let colors = ColorScheme::new(false);

    assert!(format_path_steps(&[], &PersonId::new("1"), &store, &colors).is_empty());
    assert_eq!(format_path_flow(&[], &PersonId::new("1"), &store, &colors), r#""Alice""#);
}
