use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Startup aborts if the API key is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub database_path: String,
    pub port: u16,
    pub rate_limit_cooldown_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: validate_api_key(&require_env("OPENAI_API_KEY")?)?,
            openai_base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            openai_model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            database_path: env_or("DATABASE_PATH", "resume_data.db"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rate_limit_cooldown_secs: env_or("RATE_LIMIT_COOLDOWN_SECS", "5")
                .parse::<u64>()
                .context("RATE_LIMIT_COOLDOWN_SECS must be a whole number of seconds")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// The key is only checked for its `sk-` prefix; the upstream decides the rest.
fn validate_api_key(key: &str) -> Result<String> {
    let key = key.trim();
    if !key.starts_with("sk-") {
        bail!("OPENAI_API_KEY is malformed: expected a key starting with 'sk-'");
    }
    Ok(key.to_string())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
