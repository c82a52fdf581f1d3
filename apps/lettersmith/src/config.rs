use anyhow::{Context, Result};

/// Default endpoint for the translation service (LibreTranslate-compatible).
const DEFAULT_TRANSLATE_URL: &str = "https://libretranslate.de";

/// Application configuration loaded from environment variables.
/// Loaded once at startup; a missing credential is a startup-time
/// configuration error, surfaced before any generation attempt.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub translate_api_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_URL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
