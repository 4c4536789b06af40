//! Report generation: fetch git text, fill a template, delegate to the LLM.

use std::path::Path;

use tracing::debug;

use crate::error::ChronicleError;
use crate::git::GitExecutor;
use crate::llm::{Completion, CompletionFactory};

use super::prompt::{build_commit_description_prompt, build_release_notes_prompt};

/// Which backend to use for one generation call.
#[derive(Debug, Clone, Copy)]
pub struct LlmChoice<'a> {
    /// Provider name as given on the command line (`ollama`, `openai`).
    pub provider: &'a str,
    /// Model name; `None` selects the provider's default.
    pub model: Option<&'a str>,
}

/// Generates release notes and commit descriptions.
///
/// Generic over the git source and the provider factory so either can be
/// replaced in tests.
pub struct Chronicler<G, F> {
    git: G,
    providers: F,
}

impl<G: GitExecutor, F: CompletionFactory> Chronicler<G, F> {
    pub fn new(git: G, providers: F) -> Self {
        Self { git, providers }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn providers(&self) -> &F {
        &self.providers
    }

    /// Build the release-notes prompt for `left...right` without calling a provider.
    pub async fn release_notes_prompt(
        &self,
        repo_path: &Path,
        left_branch: &str,
        right_branch: &str,
    ) -> Result<String, ChronicleError> {
        let log = self
            .git
            .log_left_right(repo_path, left_branch, right_branch)
            .await?;
        debug!(
            "Left-right log for {}...{}: {} bytes",
            left_branch,
            right_branch,
            log.len()
        );

        Ok(build_release_notes_prompt(left_branch, right_branch, &log))
    }

    /// Build the commit-description prompt without calling a provider.
    pub async fn commit_description_prompt(
        &self,
        repo_path: &Path,
    ) -> Result<String, ChronicleError> {
        let status = self.git.status_verbose(repo_path).await?;
        debug!("Verbose status: {} bytes", status.len());

        Ok(build_commit_description_prompt(&status))
    }

    /// Generate release notes comparing `left_branch` and `right_branch`.
    ///
    /// Returns the model's text unmodified.
    pub async fn release_notes(
        &self,
        repo_path: &Path,
        left_branch: &str,
        right_branch: &str,
        llm: LlmChoice<'_>,
    ) -> Result<String, ChronicleError> {
        let prompt = self
            .release_notes_prompt(repo_path, left_branch, right_branch)
            .await?;
        self.complete(&prompt, llm).await
    }

    /// Generate a `Subject` / `Description` commit message for pending changes.
    ///
    /// Returns the model's text unmodified.
    pub async fn commit_description(
        &self,
        repo_path: &Path,
        llm: LlmChoice<'_>,
    ) -> Result<String, ChronicleError> {
        let prompt = self.commit_description_prompt(repo_path).await?;
        self.complete(&prompt, llm).await
    }

    async fn complete(&self, prompt: &str, llm: LlmChoice<'_>) -> Result<String, ChronicleError> {
        let handle = self.providers.select(llm.provider, llm.model)?;
        debug!("Prompt length: {} chars", prompt.len());

        Ok(handle.complete(prompt).await?)
    }
}
