pub mod assembler;
pub mod bfs;
pub mod chooser;
pub mod hub;

pub use assembler::{HubConnection, connect_through_hub, shortest_path};
pub use bfs::bfs_find_path;
pub use chooser::{FirstChooser, FnChooser, NeighborChooser, RandomChooser};
pub use hub::{HubSearch, search_to_hub};

use crate::graph::{GraphStore, PathStep, PersonId};
use crate::pathfinding_config::{Algorithm, PathfindingConfig};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct ConnectionResult {
    pub path: Option<Vec<PathStep>>,
    pub people_explored: usize,
    pub duration_ms: u64,
}

impl ConnectionResult {
    pub fn degrees(&self) -> Option<usize> {
        self.path.as_deref().map(degrees_of_separation)
    }
}

pub fn degrees_of_separation(path: &[PathStep]) -> usize {
    path.len()
}

/// Connects two people with the algorithm named in `config`.
pub fn find_connection<C: NeighborChooser + ?Sized>(
    store: &GraphStore,
    source: &PersonId,
    target: &PersonId,
    config: &PathfindingConfig,
    chooser: &mut C,
) -> ConnectionResult {
    let search_timer = Instant::now();

    let (path, people_explored) = match config.algorithm {
        Algorithm::Hub => {
            match connect_through_hub(store, source, target, &config.hub, config.max_depth, chooser) {
                Some(found) => (Some(found.path), found.people_explored),
                None => (None, 0),
            }
        }
        Algorithm::Bfs => bfs_find_path(store, source, target, Some(config.max_depth)),
    };

    ConnectionResult {
        path,
        people_explored,
        duration_ms: search_timer.elapsed().as_millis() as u64,
    }
}
