use anyhow::{bail, Context, Result};

use crate::catalog::builder::SeriesMode;
use crate::llm_client::{DEFAULT_API_BASE, MAX_ATTEMPTS};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Gemini credential. Absent means every advisory resolves to the fallback.
    pub gemini_api_key: Option<String>,
    pub advisory_api_url: String,
    pub advisory_timeout_secs: u64,
    pub advisory_max_attempts: u32,
    pub series_mode: SeriesMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            advisory_api_url: optional_env("ADVISORY_API_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            advisory_timeout_secs: parse_env("ADVISORY_TIMEOUT_SECS", 30)?,
            advisory_max_attempts: max_attempts(parse_env("ADVISORY_MAX_ATTEMPTS", 1)?)?,
            series_mode: series_mode(
                optional_env("SERIES_MODE").as_deref(),
                parse_env("SERIES_SEED", 0)?,
            )?,
        })
    }
}

/// Non-empty value of `key`, if set.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

fn max_attempts(attempts: u32) -> Result<u32> {
    if !(1..=MAX_ATTEMPTS).contains(&attempts) {
        bail!("ADVISORY_MAX_ATTEMPTS must be between 1 and {MAX_ATTEMPTS}, got {attempts}");
    }
    Ok(attempts)
}

fn series_mode(mode: Option<&str>, seed: u64) -> Result<SeriesMode> {
    match mode.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
        None | Some("live") => Ok(SeriesMode::Live),
        Some("seeded") => Ok(SeriesMode::Seeded(seed)),
        Some(other) => bail!("SERIES_MODE must be 'live' or 'seeded', got '{other}'"),
    }
}
