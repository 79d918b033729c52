use std::env;
use std::time::Duration;

use anyhow::Context;
use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for Gemini API access.
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables
    ///
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (required)
    /// - GEMINI_MODEL: Model name (default: "gemini-1.5-flash")
    /// - GEMINI_BASE_URL: API host (default: Google Generative Language API)
    /// - GEMINI_TIMEOUT_SECS: Upper bound for one model call (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("GEMINI_API_KEY environment variable must be set")?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = parse_timeout(env::var("GEMINI_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }
}

fn parse_timeout(raw: Option<&str>) -> anyhow::Result<Duration> {
    let secs = match raw {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("GEMINI_TIMEOUT_SECS must be a whole number, got {value:?}"))?,
        None => DEFAULT_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs.max(1)))
}
