use anyhow::{ensure, Context, Result};

const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_TTL_MINUTES: i64 = 120;
const MAX_SESSION_TTL_MINUTES: i64 = 7 * 24 * 60;
const DEFAULT_LLM_MAX_ATTEMPTS: u32 = 1;
const MAX_LLM_ATTEMPTS: u32 = 5;

/// Application configuration loaded from environment variables.
///
/// The API key is not validated here. A missing key only shows up as an
/// authentication error on the first completion call.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub llm_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub session_ttl_minutes: i64,
    /// Completion requests per action. 1 sends a single request; higher
    /// values retry 429/5xx responses with exponential backoff.
    pub llm_max_attempts: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            llm_base_url: optional_env("LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            session_ttl_minutes: parse_session_ttl(optional_env("SESSION_TTL_MINUTES"))?,
            llm_max_attempts: parse_llm_attempts(optional_env("LLM_MAX_ATTEMPTS"))?,
        })
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_ttl_minutes)
    }
}

fn parse_session_ttl(value: Option<String>) -> Result<i64> {
    let Some(value) = value else {
        return Ok(DEFAULT_SESSION_TTL_MINUTES);
    };
    let minutes = value
        .parse::<i64>()
        .context("SESSION_TTL_MINUTES must be a whole number of minutes")?;
    ensure!(
        (1..=MAX_SESSION_TTL_MINUTES).contains(&minutes),
        "SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}, got {minutes}"
    );
    Ok(minutes)
}

fn parse_llm_attempts(value: Option<String>) -> Result<u32> {
    let Some(value) = value else {
        return Ok(DEFAULT_LLM_MAX_ATTEMPTS);
    };
    let attempts = value
        .parse::<u32>()
        .context("LLM_MAX_ATTEMPTS must be a whole number")?;
    ensure!(
        (1..=MAX_LLM_ATTEMPTS).contains(&attempts),
        "LLM_MAX_ATTEMPTS must be between 1 and {MAX_LLM_ATTEMPTS}, got {attempts}"
    );
    Ok(attempts)
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Config {
            groq_api_key: None,
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            llm_max_attempts: DEFAULT_LLM_MAX_ATTEMPTS,
        }
    }
}
