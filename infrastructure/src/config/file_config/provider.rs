//! Chat completion provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat completion endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL; `/v1/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    /// Environment variable read when `api_keys` is empty (default: "OPENAI_API_KEY").
    /// It may hold several comma-separated keys.
    pub api_key_env: String,
    /// Keys rotated across batch records (not recommended; prefer the env var).
    pub api_keys: Vec<String>,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_keys: Vec::new(),
            max_tokens: 512,
            request_timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    /// Configured keys, or the comma-separated keys from `api_key_env`.
    pub fn resolve_api_keys(&self) -> Vec<String> {
        let explicit = split_keys(self.api_keys.iter().map(String::as_str));
        if !explicit.is_empty() {
            return explicit;
        }
        std::env::var(&self.api_key_env)
            .map(|value| split_keys(value.split(',')))
            .unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn split_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    keys.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}
