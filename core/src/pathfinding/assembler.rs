use super::chooser::NeighborChooser;
use super::hub::search_to_hub;
use crate::frontier::SearchNode;
use crate::graph::{GraphStore, PathStep, PersonId};
use std::rc::Rc;

/// A source-to-target route that passes through the hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConnection {
    pub path: Vec<PathStep>,
    pub people_explored: usize,
}

/// Connects `source` and `target` by walking each of them to `hub`.
///
/// The result is "connected via the hub", not a shortest path: the source leg
/// comes first, then the target leg replayed from the hub outward. Either walk
/// failing means no path. A person connected to themselves needs no steps.
pub fn shortest_path<C: NeighborChooser + ?Sized>(
    store: &GraphStore,
    source: &PersonId,
    target: &PersonId,
    hub: &PersonId,
    max_depth: usize,
    chooser: &mut C,
) -> Option<Vec<PathStep>> {
    connect_through_hub(store, source, target, hub, max_depth, chooser).map(|found| found.path)
}

pub fn connect_through_hub<C: NeighborChooser + ?Sized>(
    store: &GraphStore,
    source: &PersonId,
    target: &PersonId,
    hub: &PersonId,
    max_depth: usize,
    chooser: &mut C,
) -> Option<HubConnection> {
    if source == target {
        return Some(HubConnection {
            path: Vec::new(),
            people_explored: 0,
        });
    }

    let from_source = search_to_hub(store, source, hub, max_depth, &mut *chooser)?;
    let from_target = search_to_hub(store, target, hub, max_depth, &mut *chooser)?;

    let mut path = from_source.steps();
    path.extend(hub_to_start_leg(&from_target.nodes));

    Some(HubConnection {
        path,
        people_explored: from_source.people_explored + from_target.people_explored,
    })
}

/// Replays a start-to-hub chain backwards. Each emitted step names the film
/// that links a person to the one before it on the way out from the hub,
/// which is the action of the node that person led to.
fn hub_to_start_leg(nodes: &[Rc<SearchNode>]) -> Vec<PathStep> {
    nodes
        .windows(2)
        .rev()
        .filter_map(|pair| {
            pair[1]
                .action
                .clone()
                .map(|film| PathStep::new(film, pair[0].state.clone()))
        })
        .collect()
}
