use crate::graph::PersonId;
use serde::{Deserialize, Serialize};

/// Person every hub-routed search walks toward by default.
pub const DEFAULT_HUB: &str = "102";
pub const DEFAULT_MAX_DEPTH: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Two randomized walks toward the hub, stitched together.
    #[default]
    Hub,
    /// Breadth-first search straight from source to target.
    Bfs,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Hub => "hub",
            Algorithm::Bfs => "bfs",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "bfs" => Algorithm::Bfs,
            _ => Algorithm::Hub,
        }
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::from(value.as_str())
    }
}

/// Configuration for pathfinding algorithms
#[derive(Debug, Clone)]
pub struct PathfindingConfig {
    /// Person all hub-routed connections pass through
    pub hub: PersonId,
    /// Maximum iterations of a hub walk, and maximum hops for BFS
    pub max_depth: usize,
    pub algorithm: Algorithm,
    /// Seed for the neighbor chooser; entropy when absent
    pub seed: Option<u64>,
}

impl PathfindingConfig {
    pub fn new(hub: PersonId, max_depth: usize, algorithm: Algorithm) -> Self {
        Self {
            hub,
            max_depth,
            algorithm,
            seed: None,
        }
    }

    pub fn with_hub(mut self, hub: PersonId) -> Self {
        self.hub = hub;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            hub: PersonId::new(DEFAULT_HUB),
            max_depth: DEFAULT_MAX_DEPTH,
            algorithm: Algorithm::Hub,
            seed: None,
        }
    }
}
