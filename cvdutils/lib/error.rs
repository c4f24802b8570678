//! `cvdutils::error` is a module containing error utilities for the cvd project.

use std::path::PathBuf;

use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The result of a cvdutils-related operation.
pub type CvdutilsResult<T> = Result<T, CvdutilsError>;

/// An error that occurred during a filesystem operation.
#[derive(pretty_error_debug::Debug, Error)]
pub enum CvdutilsError {
    /// An error that occurred when resolving a path to its canonical form
    #[error("failed to resolve real path of {path:?}: {source}")]
    PathResolution {
        /// The path that could not be resolved.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
