use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_INPUT_CHARS: usize = 20_000;
const DEFAULT_MAX_SKILLS: usize = 500;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Truncates classify responses. `None` returns every match.
    pub max_results: Option<usize>,
    pub max_input_chars: usize,
    pub max_skills: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_results: usize = parse_or(&lookup, "CLASSIFY_MAX_RESULTS", 0)?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_results: (max_results > 0).then_some(max_results),
            max_input_chars: parse_or(
                &lookup,
                "CLASSIFY_MAX_INPUT_CHARS",
                DEFAULT_MAX_INPUT_CHARS,
            )?,
            max_skills: parse_or(&lookup, "CLASSIFY_MAX_SKILLS", DEFAULT_MAX_SKILLS)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
