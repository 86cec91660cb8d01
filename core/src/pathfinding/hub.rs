use super::chooser::NeighborChooser;
use crate::frontier::{Frontier, SearchNode, StackFrontier};
use crate::graph::{GraphStore, NeighborPair, PathStep, PersonId};
use rustc_hash::FxHashSet;
use std::rc::Rc;
use tracing::{debug, trace};

/// A completed walk from some person to the hub.
#[derive(Debug)]
pub struct HubSearch {
    /// Nodes kept by the walk, root first and hub last. Each node is the
    /// parent of the one after it.
    pub nodes: Vec<Rc<SearchNode>>,
    pub people_explored: usize,
}

impl HubSearch {
    pub fn root(&self) -> &Rc<SearchNode> {
        &self.nodes[0]
    }

    pub fn last(&self) -> &Rc<SearchNode> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of co-star hops between the start and the hub.
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    /// `(film, person)` steps leading from the start to the hub.
    pub fn steps(&self) -> Vec<PathStep> {
        self.nodes
            .iter()
            .skip(1)
            .filter_map(|node| {
                node.action
                    .clone()
                    .map(|film| PathStep::new(film, node.state.clone()))
            })
            .collect()
    }
}

enum WalkStep {
    Continue,
    Reached,
    Stuck,
}

struct HubWalk<'a> {
    store: &'a GraphStore,
    hub: &'a PersonId,
    frontier: StackFrontier,
    recorded: Vec<Rc<SearchNode>>,
    explored: FxHashSet<PersonId>,
}

impl<'a> HubWalk<'a> {
    fn new(store: &'a GraphStore, start: PersonId, hub: &'a PersonId) -> Self {
        let mut walk = Self {
            store,
            hub,
            frontier: StackFrontier::new(),
            recorded: Vec::new(),
            explored: FxHashSet::default(),
        };
        walk.keep(SearchNode::root(start));
        walk
    }

    fn keep(&mut self, node: Rc<SearchNode>) {
        self.frontier.add(Rc::clone(&node));
        self.recorded.push(node);
    }

    fn step<C: NeighborChooser + ?Sized>(&mut self, chooser: &mut C) -> WalkStep {
        let Some(node) = self.frontier.remove() else {
            return WalkStep::Stuck;
        };

        if &node.state == self.hub {
            return WalkStep::Reached;
        }

        self.explored.insert(node.state.clone());

        let neighbors = self.store.neighbors_of(&node.state);
        if neighbors.is_empty() {
            trace!(person = %node.state, "no co-stars");
            return WalkStep::Stuck;
        }

        if let Some((film, _)) = neighbors.iter().find(|(_, person)| person == self.hub) {
            trace!(person = %node.state, %film, "hub is a direct co-star");
            self.keep(SearchNode::child(&node, self.hub.clone(), film.clone()));
            return WalkStep::Reached;
        }

        let candidates: Vec<NeighborPair> = neighbors
            .into_iter()
            .filter(|(_, person)| {
                !self.explored.contains(person) && !self.frontier.contains_state(person)
            })
            .collect();

        if candidates.is_empty() {
            trace!(person = %node.state, "every co-star already explored");
            return WalkStep::Stuck;
        }

        let Some((film, person)) = chooser
            .choose(&candidates)
            .and_then(|index| candidates.get(index).cloned())
        else {
            return WalkStep::Stuck;
        };

        trace!(from = %node.state, to = %person, %film, "stepping to co-star");
        self.keep(SearchNode::child(&node, person, film));
        WalkStep::Continue
    }

    fn finish(self) -> HubSearch {
        HubSearch {
            nodes: self.recorded,
            people_explored: self.explored.len(),
        }
    }
}

/// Walks from `start` toward `hub` for at most `max_depth` expansions.
///
/// This is a randomized single-path walk rather than a shortest-path search.
/// A hub that is a direct co-star is always taken; otherwise `chooser` picks one
/// co-star that is neither explored nor waiting in the frontier. The walk gives
/// up when it runs out of co-stars or of depth, so it can miss a path that
/// exists.
pub fn search_to_hub<C: NeighborChooser + ?Sized>(
    store: &GraphStore,
    start: &PersonId,
    hub: &PersonId,
    max_depth: usize,
    chooser: &mut C,
) -> Option<HubSearch> {
    let mut walk = HubWalk::new(store, start.clone(), hub);

    if start == hub {
        return Some(walk.finish());
    }

    for _ in 0..max_depth {
        match walk.step(chooser) {
            WalkStep::Continue => {}
            WalkStep::Reached => {
                let search = walk.finish();
                debug!(%start, %hub, hops = search.hops(), "reached hub");
                return Some(search);
            }
            WalkStep::Stuck => {
                debug!(%start, %hub, "walk stuck before reaching hub");
                return None;
            }
        }
    }

    debug!(%start, %hub, max_depth, "depth exhausted before reaching hub");
    None
}
