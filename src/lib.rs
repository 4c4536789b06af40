//! chronicler - A CLI tool that turns git history into release notes and commit descriptions.
//!
//! # Overview
//!
//! chronicler runs `git log --left-right` or `git status -v` in a repository,
//! wraps the output in a prompt, and asks a local Ollama model or the OpenAI
//! API to write the text.

pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::{ChronicleError, GitError, LlmError};
pub use git::{GitCli, GitExecutor};
pub use llm::{Completion, CompletionFactory, LlmHandle, Provider, ProviderSelector};
pub use report::{Chronicler, LlmChoice};
