//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use git2::{Oid, Repository, Signature};

use chronicler::error::{GitError, LlmError};
use chronicler::git::GitExecutor;
use chronicler::llm::{Completion, CompletionFactory};

/// Whether a git executable is available for tests that shell out.
pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self, author: &str) -> Signature<'_> {
        let email = format!("{}@example.com", author.to_lowercase().replace(' ', "."));
        Signature::now(author, &email).expect("Failed to create signature")
    }

    /// Create a commit on HEAD with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        self.commit_as("Test User", message)
    }

    /// Create a commit on HEAD authored by `author`.
    pub fn commit_as(&self, author: &str, message: &str) -> Oid {
        let sig = self.signature(author);

        // Create or update a file to have something to commit
        let file_path = self.dir.path().join("test.txt");
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        std::fs::write(&file_path, content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new("test.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a branch pointing to the given OID.
    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Failed to find commit");
        self.repo
            .branch(name, &commit, false)
            .expect("Failed to create branch");
    }

    /// Point HEAD at an existing branch so later commits land on it.
    pub fn switch_to(&self, name: &str) {
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .expect("Failed to set HEAD");
        self.repo
            .checkout_head(Some(git2::build::CheckoutBuilder::new().force()))
            .expect("Failed to check out HEAD");
    }
}

/// [`GitExecutor`] returning canned text, counting calls.
#[derive(Default)]
pub struct FakeGit {
    pub log: Option<String>,
    pub status: Option<String>,
    pub calls: AtomicUsize,
}

impl FakeGit {
    pub fn with_log(log: &str) -> Self {
        Self {
            log: Some(log.to_string()),
            ..Default::default()
        }
    }

    pub fn with_status(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    /// Every call fails like git does for an unknown revision.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub const UNKNOWN_REVISION: &str =
    "fatal: ambiguous argument 'main...nope': unknown revision or path not in the working tree.";

fn unknown_revision() -> GitError {
    GitError::CommandFailed {
        command: "log".to_string(),
        code: Some(128),
        stderr: UNKNOWN_REVISION.to_string(),
    }
}

#[async_trait]
impl GitExecutor for FakeGit {
    async fn log_left_right(
        &self,
        _repo_path: &Path,
        _left: &str,
        _right: &str,
    ) -> Result<String, GitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.clone().ok_or_else(unknown_revision)
    }

    async fn status_verbose(&self, _repo_path: &Path) -> Result<String, GitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.status.clone().ok_or_else(unknown_revision)
    }
}

/// Completion returning a fixed string and recording the prompts it saw.
#[derive(Clone)]
pub struct FakeCompletion {
    pub reply: String,
    pub prompts: Arc<std::sync::Mutex<Vec<String>>>,
}

#[async_trait]
impl Completion for FakeCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Factory handing out [`FakeCompletion`] handles.
pub struct FakeFactory {
    pub reply: String,
    pub selections: std::sync::Mutex<Vec<(String, Option<String>)>>,
    pub prompts: Arc<std::sync::Mutex<Vec<String>>>,
}

impl FakeFactory {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            selections: std::sync::Mutex::new(Vec::new()),
            prompts: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn selection_count(&self) -> usize {
        self.selections.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionFactory for FakeFactory {
    type Handle = FakeCompletion;

    fn select(&self, provider: &str, model: Option<&str>) -> Result<FakeCompletion, LlmError> {
        self.selections
            .lock()
            .unwrap()
            .push((provider.to_string(), model.map(str::to_string)));
        Ok(FakeCompletion {
            reply: self.reply.clone(),
            prompts: Arc::clone(&self.prompts),
        })
    }
}

/// Factory that must never be reached.
pub struct UnreachableFactory;

impl CompletionFactory for UnreachableFactory {
    type Handle = FakeCompletion;

    fn select(&self, provider: &str, _model: Option<&str>) -> Result<FakeCompletion, LlmError> {
        panic!("provider {provider} selected after a git failure")
    }
}
