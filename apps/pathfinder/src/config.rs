use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    /// Upper bound on one analysis call, transport included.
    pub analysis_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .context("Required environment variable 'GEMINI_API_KEY' is not set")?;

        let timeout_secs = match lookup("ANALYSIS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("ANALYSIS_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            gemini_api_key,
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            analysis_timeout: Duration::from_secs(timeout_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
