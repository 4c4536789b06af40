//! Repository opening.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

/// Open the repository at `path` and return the directory git commands
/// should run in.
///
/// For a normal repository this is the work tree; for a bare repository it
/// is the git directory itself.
pub fn open_repository(path: &Path) -> Result<PathBuf, GitError> {
    let repo = Repository::open(path).map_err(GitError::OpenRepository)?;

    let dir = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
    debug!("Opened repository at {}", dir.display());

    Ok(dir)
}
