//! Provider API configuration.
//!
//! The cost tracker only records spend; it never calls the provider itself.
//! The API settings are still read at startup so the tracker is wired for the
//! client that submits usage, and so a misconfigured environment shows up in
//! verbose logs rather than on first use.

use tracing::debug;

/// Environment variable holding the DashScope API key.
pub const API_KEY_ENV: &str = "QWEN_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "QWEN_BASE_URL";

/// OpenAI-compatible DashScope endpoint used when no override is set.
pub const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1/";

/// API connection settings for the Qwen provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// API key, if configured. Absent keys are fine for pure reporting.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
}

impl ProviderConfig {
    /// Read the provider settings from the environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        debug!(
            base_url = %base_url,
            api_key_set = api_key.is_some(),
            "loaded provider configuration"
        );

        Self { api_key, base_url }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
