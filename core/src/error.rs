//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems while reading a dataset directory.
///
/// Individual malformed rows are not errors; they are counted in
/// [`LoadReport`](crate::loading::LoadReport) and skipped.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset directory does not exist.
    #[error("data directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A dataset file could not be opened.
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A dataset file has no usable header row.
    #[error("failed to read header of {}: {}", .path.display(), .source)]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
