use anyhow::{Context, Result};

use crate::leads::FirebaseConfig;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub firebase: FirebaseConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let firebase_raw = require_env("FIREBASE_CONFIG")?;

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            firebase: parse_firebase_config(&firebase_raw)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_firebase_config(raw: &str) -> Result<FirebaseConfig> {
    serde_json::from_str(raw).context("FIREBASE_CONFIG must be a JSON object with projectId and apiKey")
}
