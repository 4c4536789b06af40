//! Provider identity and the completion capability.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::error::LlmError;

use super::ollama::OllamaClient;
use super::openai::OpenAiClient;

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Locally hosted Ollama runtime.
    Ollama,
    /// OpenAI cloud API.
    OpenAi,
}

impl Provider {
    /// Name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Ollama => "ollama",
            Provider::OpenAi => "openai",
        }
    }

    /// Human-readable name used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Ollama => "Ollama",
            Provider::OpenAi => "OpenAI",
        }
    }

    /// Model used when `--llm-model` is not given.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Ollama => "llama2",
            Provider::OpenAi => "gpt-4o-mini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ollama" => Ok(Provider::Ollama),
            "openai" => Ok(Provider::OpenAi),
            other => Err(LlmError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// A text-completion service: prompt in, generated text out.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Handle to one of the two supported backends.
#[derive(Debug, Clone)]
pub enum LlmHandle {
    Ollama(OllamaClient),
    OpenAi(OpenAiClient),
}

impl LlmHandle {
    pub fn provider(&self) -> Provider {
        match self {
            LlmHandle::Ollama(_) => Provider::Ollama,
            LlmHandle::OpenAi(_) => Provider::OpenAi,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            LlmHandle::Ollama(client) => client.model(),
            LlmHandle::OpenAi(client) => client.model(),
        }
    }
}

#[async_trait]
impl Completion for LlmHandle {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        match self {
            LlmHandle::Ollama(client) => client.complete(prompt).await,
            LlmHandle::OpenAi(client) => client.complete(prompt).await,
        }
    }
}
