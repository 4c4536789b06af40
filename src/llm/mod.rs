//! LLM provider selection and completion clients.

pub mod ollama;
pub mod openai;
pub mod provider;
pub mod selector;

pub use ollama::OllamaClient;
pub use openai::OpenAiClient;
pub use provider::{Completion, LlmHandle, Provider};
pub use selector::{
    API_KEY_PROMPT, CompletionFactory, ProviderSelector, SecretPrompt, TerminalPrompt,
};
