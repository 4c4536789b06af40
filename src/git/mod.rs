//! Git access: repositories are opened with git2-rs, history and status
//! text come from the git CLI.

pub mod repository;
pub mod subprocess;

use std::path::Path;

use async_trait::async_trait;

use crate::error::GitError;

pub use repository::open_repository;
pub use subprocess::{GitCli, check_git_installed, run_git};

/// Source of raw version-control text for the report generator.
///
/// The production implementation is [`GitCli`]; tests substitute fakes.
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Equivalent of `git log --left-right <left>...<right>` in `repo_path`.
    async fn log_left_right(
        &self,
        repo_path: &Path,
        left: &str,
        right: &str,
    ) -> Result<String, GitError>;

    /// Equivalent of `git status -v` in `repo_path`.
    async fn status_verbose(&self, repo_path: &Path) -> Result<String, GitError>;
}
