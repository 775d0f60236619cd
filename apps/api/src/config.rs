use anyhow::{Context, Result};

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Application configuration loaded from environment variables.
/// Every variable is optional; without `ANTHROPIC_API_KEY` the service runs
/// in heuristic-only mode unless callers supply their own key.
#[derive(Debug, Clone)]
pub struct Config {
    /// Process-wide default credential. An empty value is normalised to `None`.
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub host: String,
    pub port: u16,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_base_url: optional_env("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Heuristic-only config used by handler tests.
    pub fn for_tests(anthropic_api_key: Option<&str>) -> Self {
        Config {
            anthropic_api_key: anthropic_api_key.map(str::to_string),
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8001,
            llm_timeout_secs: 30,
            rust_log: "info".to_string(),
        }
    }
}
