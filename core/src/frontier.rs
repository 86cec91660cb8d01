//! Search nodes and the containers that order their expansion.

use crate::graph::{FilmId, PathStep, PersonId};
use std::{collections::VecDeque, rc::Rc};

/// A person reached during a search, linked back to the node it was reached from.
///
/// The root of a search has neither `parent` nor `action`. Every other node's
/// `action` is a film shared by its `state` and its parent's `state`.
#[derive(Debug)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<Rc<SearchNode>>,
    pub action: Option<FilmId>,
}

impl SearchNode {
    pub fn root(state: PersonId) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
        })
    }

    pub fn child(parent: &Rc<SearchNode>, state: PersonId, action: FilmId) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
        })
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Steps from the root of this node's chain down to the node itself.
    /// The root contributes no step.
    pub fn path_from_root(&self) -> Vec<PathStep> {
        let mut steps = Vec::new();
        let mut current = Some(self);

        while let Some(node) = current {
            if let Some(action) = &node.action {
                steps.push(PathStep::new(action.clone(), node.state.clone()));
            }
            current = node.parent.as_deref();
        }

        steps.reverse();
        steps
    }
}

/// Not-yet-expanded search nodes. The removal order is the search discipline.
pub trait Frontier {
    fn add(&mut self, node: Rc<SearchNode>);

    /// Takes the next node to expand, or `None` when the frontier is empty.
    fn remove(&mut self) -> Option<Rc<SearchNode>>;

    fn contains_state(&self, state: &PersonId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<Rc<SearchNode>>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Rc<SearchNode>) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Option<Rc<SearchNode>> {
        self.nodes.pop()
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Rc<SearchNode>>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Rc<SearchNode>) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Option<Rc<SearchNode>> {
        self.nodes.pop_front()
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
