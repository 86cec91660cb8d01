use costarpath_core::{FilmId, LoadError, LoadReport, PersonId, load_dataset, load_dataset_with_report};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PEOPLE: &str = "id,name,birth
102,Kevin Bacon,1958
129,Tom Cruise,1962
144,Cary Elwes,1962
158,Tom Hanks,1956
1697,Chris Sarandon,1951
";

const MOVIES: &str = "id,title,year
104257,A Few Good Men,1992
109830,Forrest Gump,1994
93779,The Princess Bride,1987
";

const STARS: &str = "person_id,movie_id
102,104257
129,104257
144,93779
158,109830
1697,93779
999,104257
102,999999
";

fn write_dataset(people: &str, movies: &str, stars: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), people).unwrap();
    fs::write(dir.path().join("movies.csv"), movies).unwrap();
    fs::write(dir.path().join("stars.csv"), stars).unwrap();
    dir
}

#[test]
fn test_load_small_dataset() {
    let dir = write_dataset(PEOPLE, MOVIES, STARS);

    let store = load_dataset(dir.path()).unwrap();

    assert_eq!(store.person_count(), 5);
    assert_eq!(store.film_count(), 3);

    let kevin = store.person(&PersonId::new("102")).unwrap();
    assert_eq!(kevin.name, "Kevin Bacon");
    assert_eq!(kevin.birth, "1958");
    assert!(kevin.films.contains(&FilmId::new("104257")));

    let bride = store.film(&FilmId::new("93779")).unwrap();
    assert_eq!(bride.title, "The Princess Bride");
    assert_eq!(bride.year, "1987");
    assert_eq!(bride.stars.len(), 2);
}

#[test]
fn test_unresolvable_links_are_dropped() {
    let dir = write_dataset(PEOPLE, MOVIES, STARS);

    let (store, report) = load_dataset_with_report(dir.path()).unwrap();

    assert_eq!(
        report,
        LoadReport {
            people: 5,
            films: 3,
            links: 5,
            skipped_rows: 0,
            dropped_links: 2,
        }
    );
    assert!(store.person(&PersonId::new("999")).is_none());
    assert_eq!(store.person(&PersonId::new("102")).unwrap().films.len(), 1);
}

#[test]
fn test_malformed_rows_are_skipped() {
    let people = "id,name,birth
1,Complete Person,1970
2,Missing Birth
3,Empty Birth,
";
    let dir = write_dataset(people, MOVIES, "person_id,movie_id\n1\n3,93779\n");

    let (store, report) = load_dataset_with_report(dir.path()).unwrap();

    assert_eq!(store.person_count(), 2);
    assert!(store.person(&PersonId::new("2")).is_none());
    assert_eq!(store.person(&PersonId::new("3")).unwrap().birth, "");
    assert_eq!(report.skipped_rows, 2);
    assert_eq!(report.links, 1);
}

#[test]
fn test_duplicate_names_share_an_index_entry() {
    let people = "id,name,birth
1,Chris Evans,1981
2,Chris Evans,1966
";
    let dir = write_dataset(people, MOVIES, "person_id,movie_id\n");

    let store = load_dataset(dir.path()).unwrap();

    let ids = store.person_ids_for_name("chris evans");
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_missing_directory() {
    let result = load_dataset(Path::new("/definitely/not/a/dataset"));

    assert!(matches!(result, Err(LoadError::MissingDirectory(_))));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), PEOPLE).unwrap();

    let result = load_dataset(dir.path());

    match result {
        Err(LoadError::Open { path, .. }) => assert!(path.ends_with("movies.csv")),
        other => panic!("expected open error, got {:?}", other.map(|store| store.person_count())),
    }
}
