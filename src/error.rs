//! Error types for chronicler modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with {}: {}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")),
             stderr.trim())]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from provider selection and completion calls.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Unsupported LLM: {0}")]
    UnsupportedProvider(String),

    #[error("OpenAI API key is required.")]
    MissingApiKey,

    #[error("Failed to read API key from terminal: {0}")]
    PromptFailed(String),

    #[error("HTTP request to {provider} failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API returned {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} returned an unreadable response: {detail}")]
    InvalidResponse {
        provider: &'static str,
        detail: String,
    },

    #[error("{0} returned an empty completion")]
    EmptyResponse(&'static str),
}

/// Errors surfaced by the report generation commands.
#[derive(Error, Debug)]
pub enum ChronicleError {
    #[error("Git error: {0}")]
    RepositoryAccess(#[from] GitError),

    #[error(transparent)]
    Provider(#[from] LlmError),
}
