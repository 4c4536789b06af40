//! Release notes and commit descriptions.

pub mod generate;
pub mod prompt;

pub use generate::{Chronicler, LlmChoice};
pub use prompt::{build_commit_description_prompt, build_release_notes_prompt};
