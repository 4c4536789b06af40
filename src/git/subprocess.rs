//! git CLI spawning.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

use super::GitExecutor;
use super::repository::open_repository;

/// Locate the git executable on `PATH`.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_git_installed() -> Result<PathBuf, GitError> {
    which::which("git").map_err(|_| GitError::NotInstalled)
}

/// Run `git <args>` in `dir` and return its stdout.
///
/// Colour output is disabled so the text embedded in prompts carries no
/// escape sequences. A non-zero exit becomes [`GitError::CommandFailed`]
/// carrying git's stderr.
pub async fn run_git(program: &Path, dir: &Path, args: &[&str]) -> Result<String, GitError> {
    debug!("Running git {} in {}", args.join(" "), dir.display());

    let output = Command::new(program)
        .args(["-c", "color.ui=never"])
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(GitError::SpawnFailed)?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: args.first().copied().unwrap_or_default().to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    debug!("git {} returned {} bytes", args.join(" "), stdout.len());
    Ok(stdout)
}

/// [`GitExecutor`] backed by the installed git binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    /// Find git on `PATH`.
    pub fn locate() -> Result<Self, GitError> {
        Ok(Self {
            program: check_git_installed()?,
        })
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl GitExecutor for GitCli {
    async fn log_left_right(
        &self,
        repo_path: &Path,
        left: &str,
        right: &str,
    ) -> Result<String, GitError> {
        let dir = open_repository(repo_path)?;
        let range = format!("{left}...{right}");
        run_git(&self.program, &dir, &["log", "--left-right", &range]).await
    }

    async fn status_verbose(&self, repo_path: &Path) -> Result<String, GitError> {
        let dir = open_repository(repo_path)?;
        run_git(&self.program, &dir, &["status", "-v"]).await
    }
}
