use std::path::PathBuf;

use cvdutils::CvdutilsError;
use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The result of a cvd-related operation.
pub type CvdResult<T> = Result<T, CvdError>;

/// An error that occurred while managing an instance group.
#[derive(pretty_error_debug::Debug, Error)]
pub enum CvdError {
    /// The instance id is already registered in the group.
    #[error("instance id {instance_id} is taken in group {group}")]
    DuplicateInstanceId {
        /// The rejected instance id.
        instance_id: i32,

        /// The internal name of the group that already holds the id.
        group: String,
    },

    /// The group's home directory exists but could not be canonicalized.
    #[error("failed to resolve home directory {path:?}")]
    PathResolution {
        /// The home directory that could not be resolved.
        path: PathBuf,

        /// The underlying resolution error.
        #[source]
        source: CvdutilsError,
    },
}
