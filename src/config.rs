//! Runtime configuration read from the environment.
//!
//! The environment is read once in `main`; everything below receives a
//! [`Config`] value instead of calling `std::env` itself.

use std::env;

/// Environment variable holding the OpenAI credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the OpenAI API base URL.
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Environment variable pointing at the Ollama server (same name the Ollama CLI uses).
pub const OLLAMA_HOST_VAR: &str = "OLLAMA_HOST";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OpenAI API key, `None` when unset or empty.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub ollama_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let openai_api_key = non_empty_var(OPENAI_API_KEY_VAR);

        let openai_base_url = non_empty_var(OPENAI_BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let ollama_host = non_empty_var(OLLAMA_HOST_VAR)
            .map(|host| normalize_host(&host))
            .unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string());

        Self {
            openai_api_key,
            openai_base_url,
            ollama_host,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accept `OLLAMA_HOST` values like `0.0.0.0:11434` that omit the scheme.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}
