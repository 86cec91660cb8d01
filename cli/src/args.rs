use clap::Parser;
use costarpath_core::pathfinding_config::{DEFAULT_HUB, DEFAULT_MAX_DEPTH};
use costarpath_core::{Algorithm, PathfindingConfig, PersonId};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "costarpath")]
#[command(about = "Find how two actors are connected through the films they starred in")]
pub struct Args {
    /// First person's name
    pub person1: String,

    /// Second person's name
    pub person2: String,

    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(short, long, value_name = "DIR", default_value = "large")]
    pub data: PathBuf,

    /// Person id every hub-routed connection passes through
    #[arg(long, value_name = "ID", default_value = DEFAULT_HUB)]
    pub hub: String,

    /// Maximum search depth per walk
    #[arg(short = 'm', long, value_name = "STEPS", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Search strategy: "hub" (random walks through the hub) or "bfs"
    #[arg(short, long, value_name = "ALGORITHM", default_value = "hub")]
    pub algorithm: String,

    /// Seed the random neighbor choice for reproducible results
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn pathfinding_config(&self) -> PathfindingConfig {
        PathfindingConfig::new(
            PersonId::new(self.hub.as_str()),
            self.max_depth,
            Algorithm::from(self.algorithm.as_str()),
        )
        .with_seed(self.seed)
    }
}
