use crate::frontier::{Frontier, QueueFrontier, SearchNode};
use crate::graph::{GraphStore, PathStep, PersonId};
use rustc_hash::FxHashMap;

pub type BfsResult = (Option<Vec<PathStep>>, usize);

/// Breadth-first search from `source` to `target` over shared films.
///
/// Returns the fewest-hop path, or `None` when the target is unreachable
/// within `max_depth` hops, along with how many people were reached.
pub fn bfs_find_path(
    store: &GraphStore,
    source: &PersonId,
    target: &PersonId,
    max_depth: Option<usize>,
) -> BfsResult {
    if source == target {
        return (Some(Vec::new()), 1);
    }

    let mut frontier = QueueFrontier::new();
    let mut depth_of: FxHashMap<PersonId, usize> = FxHashMap::default();

    frontier.add(SearchNode::root(source.clone()));
    depth_of.insert(source.clone(), 0);

    while let Some(node) = frontier.remove() {
        let depth = depth_of.get(&node.state).copied().unwrap_or(0);
        if max_depth.is_some_and(|limit| depth >= limit) {
            continue;
        }

        for (film, person) in store.neighbors_of(&node.state) {
            if depth_of.contains_key(&person) {
                continue;
            }

            let child = SearchNode::child(&node, person.clone(), film);
            if &person == target {
                return (Some(child.path_from_root()), depth_of.len() + 1);
            }

            depth_of.insert(person, depth + 1);
            frontier.add(child);
        }
    }

    (None, depth_of.len())
}
