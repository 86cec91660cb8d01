use super::*;
use costarpath_core::{Algorithm, FirstChooser, PathfindingConfig, degrees_of_separation, find_connection};

#[test]
fn test_default_config() {
    let config = PathfindingConfig::default();

    assert_eq!(config.hub, pid("102"));
    assert_eq!(config.max_depth, 6);
    assert_eq!(config.algorithm, Algorithm::Hub);
    assert!(config.seed.is_none());
}

#[test]
fn test_hub_algorithm_routes_through_hub() {
    let store = store_from(
        &["a", "b", HUB],
        &[("f1", &["a", "b"]), ("f2", &["a", HUB]), ("f3", &["b", HUB])],
    );
    let config = PathfindingConfig::default().with_hub(pid(HUB));

    let result = find_connection(&store, &pid("a"), &pid("b"), &config, &mut FirstChooser);

    assert_eq!(result.path, Some(vec![step("f2", HUB), step("f3", "b")]));
    assert_eq!(result.degrees(), Some(2));
}

#[test]
fn test_bfs_algorithm_goes_direct() {
    let store = store_from(
        &["a", "b", HUB],
        &[("f1", &["a", "b"]), ("f2", &["a", HUB]), ("f3", &["b", HUB])],
    );
    let config = PathfindingConfig::default()
        .with_hub(pid(HUB))
        .with_algorithm(Algorithm::Bfs);

    let result = find_connection(&store, &pid("a"), &pid("b"), &config, &mut FirstChooser);

    assert_eq!(result.path, Some(vec![step("f1", "b")]));
    assert_eq!(result.degrees(), Some(1));
}

#[test]
fn test_not_connected() {
    let store = create_chain_store();
    let config = PathfindingConfig::new(pid(HUB), 6, Algorithm::Hub);

    let result = find_connection(&store, &pid("a"), &pid("x"), &config, &mut FirstChooser);

    assert!(result.path.is_none());
    assert!(result.degrees().is_none());
}

#[test]
fn test_degrees_counts_steps() {
    assert_eq!(degrees_of_separation(&[]), 0);
    assert_eq!(degrees_of_separation(&[step("f1", "b"), step("f2", "c")]), 2);
}
