use anyhow::{Context, Result};

/// Which backend serves `/api/generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorMode {
    /// Forward composed prompts to the Anthropic Messages API.
    Claude,
    /// Local template/random-choice generation, no network calls.
    Template,
}

/// Application configuration loaded from environment variables.
/// The API key is deliberately optional: a missing credential surfaces as a
/// per-request 500, not a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub anthropic_api_key: Option<String>,
    pub generator_mode: GeneratorMode,
    pub index_html_path: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let generator_mode = match std::env::var("GENERATOR_MODE").as_deref() {
            Ok("template") => GeneratorMode::Template,
            Ok("claude") | Err(_) => GeneratorMode::Claude,
            Ok(other) => anyhow::bail!(
                "GENERATOR_MODE must be 'claude' or 'template', got '{other}'"
            ),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            generator_mode,
            index_html_path: std::env::var("INDEX_HTML").unwrap_or_else(|_| "index.html".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
