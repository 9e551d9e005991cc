use anyhow::{Context, Result};

const DEFAULT_PROFILE_API_URL: &str = "https://leetcode-stats-api.herokuapp.com";
const DEFAULT_ANILIST_API_URL: &str = "https://graphql.anilist.co";
const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub generative_ai_api_key: String,
    pub profile_api_url: String,
    pub anilist_api_url: String,
    pub gemini_api_url: String,
    /// Applied to every outbound collaborator call.
    pub upstream_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generative_ai_api_key: require_env("GENERATIVE_AI_API_KEY")?,
            profile_api_url: env_or("PROFILE_API_URL", DEFAULT_PROFILE_API_URL),
            anilist_api_url: env_or("ANILIST_API_URL", DEFAULT_ANILIST_API_URL),
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            upstream_timeout_secs: env_or("UPSTREAM_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
