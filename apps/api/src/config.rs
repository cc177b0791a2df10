use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Provider API keys are optional: a missing key silently disables that
/// provider rather than failing requests.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub data_dir: String,
    /// When false, an exhausted provider list is a 503 instead of a keyword
    /// answer, and starting with zero credentials is a configuration error.
    pub keyword_fallback: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            keyword_fallback: match std::env::var("KEYWORD_FALLBACK") {
                Ok(v) => v
                    .parse::<bool>()
                    .context("KEYWORD_FALLBACK must be 'true' or 'false'")?,
                Err(_) => true,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        if !config.keyword_fallback
            && config.gemini_api_key.is_none()
            && config.openai_api_key.is_none()
        {
            bail!(
                "KEYWORD_FALLBACK=false requires at least one of GEMINI_API_KEY or OPENAI_API_KEY"
            );
        }

        Ok(config)
    }
}

/// Missing and empty values both count as "not configured".
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
