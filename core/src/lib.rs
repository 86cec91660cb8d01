pub mod error;
pub mod frontier;
pub mod graph;
pub mod loading;
pub mod pathfinding;
pub mod pathfinding_config;

// Re-export commonly used items
pub use error::LoadError;
pub use frontier::{Frontier, QueueFrontier, SearchNode, StackFrontier};
pub use graph::{Film, FilmId, GraphStore, NeighborPair, PathStep, Person, PersonId};
pub use loading::{LoadReport, load_dataset, load_dataset_with_report};
pub use pathfinding::{
    ConnectionResult, FirstChooser, FnChooser, HubSearch, NeighborChooser, RandomChooser,
    bfs_find_path, degrees_of_separation, find_connection, search_to_hub, shortest_path,
};
pub use pathfinding_config::{Algorithm, PathfindingConfig};
