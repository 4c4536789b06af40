//! Provider selection and credential acquisition.

use dialoguer::Password;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::LlmError;

use super::ollama::OllamaClient;
use super::openai::OpenAiClient;
use super::provider::{Completion, LlmHandle, Provider};

/// Prompt shown when no OpenAI key is configured.
pub const API_KEY_PROMPT: &str = "Please enter your OpenAI API key";

/// Interactive source of secrets, used when a credential is not configured.
#[cfg_attr(test, mockall::automock)]
pub trait SecretPrompt {
    /// Ask for a secret without echoing the input.
    fn read_secret(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Masked terminal input via dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn read_secret(&self, prompt: &str) -> Result<String, LlmError> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| LlmError::PromptFailed(e.to_string()))
    }
}

/// Builds a completion handle from a provider name and optional model.
pub trait CompletionFactory {
    type Handle: Completion;

    fn select(&self, provider: &str, model: Option<&str>) -> Result<Self::Handle, LlmError>;
}

/// Default [`CompletionFactory`]: Ollama or OpenAI, configured from [`Config`].
pub struct ProviderSelector<P = TerminalPrompt> {
    config: Config,
    prompt: P,
}

impl ProviderSelector<TerminalPrompt> {
    pub fn new(config: Config) -> Self {
        Self::with_prompt(config, TerminalPrompt)
    }
}

impl<P: SecretPrompt> ProviderSelector<P> {
    pub fn with_prompt(config: Config, prompt: P) -> Self {
        Self { config, prompt }
    }

    /// Resolve the OpenAI key: configured value first, then one masked prompt.
    fn openai_api_key(&self) -> Result<String, LlmError> {
        if let Some(key) = &self.config.openai_api_key {
            return Ok(key.clone());
        }

        debug!("OpenAI API key not configured, prompting");
        let key = self.prompt.read_secret(API_KEY_PROMPT)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        Ok(key.to_string())
    }
}

impl<P: SecretPrompt> CompletionFactory for ProviderSelector<P> {
    type Handle = LlmHandle;

    fn select(&self, provider: &str, model: Option<&str>) -> Result<LlmHandle, LlmError> {
        let provider: Provider = provider.parse()?;
        let model = model.unwrap_or_else(|| provider.default_model());

        info!("Using {} model {}", provider.display_name(), model);

        match provider {
            Provider::Ollama => Ok(LlmHandle::Ollama(OllamaClient::new(
                &self.config.ollama_host,
                model,
            )?)),
            Provider::OpenAi => {
                let api_key = self.openai_api_key()?;
                Ok(LlmHandle::OpenAi(OpenAiClient::new(
                    &self.config.openai_base_url,
                    &api_key,
                    model,
                )?))
            }
        }
    }
}
