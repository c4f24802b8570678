//! `cvdutils::file` is a module containing read-only filesystem probes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{CvdutilsError, CvdutilsResult};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Returns `true` if `path` points to a directory, following symlinks.
pub fn directory_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Returns `true` if anything exists at `path`, following symlinks.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Resolves `path` to its canonical absolute form with all symlinks resolved.
pub fn realpath(path: impl AsRef<Path>) -> CvdutilsResult<PathBuf> {
    let path = path.as_ref();
    fs::canonicalize(path).map_err(|source| {
        tracing::debug!("failed to resolve real path of {}: {}", path.display(), source);
        CvdutilsError::PathResolution {
            path: path.to_path_buf(),
            source,
        }
    })
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
