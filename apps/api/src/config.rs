use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
const DEFAULT_MODEL: &str = "deepseek-chat";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_PORT: u16 = 8080;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the LLM client needs to reach the completion provider.
///
/// The credential is optional on purpose: a missing key is only reported
/// when a translation is attempted, and then goes down the fallback path.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout_secs = lookup("LLM_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let temperature = lookup("LLM_TEMPERATURE")
            .map(|v| v.parse::<f32>())
            .transpose()
            .context("LLM_TEMPERATURE must be a number")?
            .unwrap_or(DEFAULT_TEMPERATURE);

        let port = lookup("PORT")
            .map(|v| v.parse::<u16>())
            .transpose()
            .context("PORT must be a valid port number")?
            .unwrap_or(DEFAULT_PORT);

        Ok(Config {
            provider: ProviderConfig {
                api_key: lookup("DEEPSEEK_API_KEY"),
                base_url: lookup("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
                timeout: Duration::from_secs(timeout_secs),
            },
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
