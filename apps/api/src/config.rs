use std::str::FromStr;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub feed_max_retries: u32,
    pub feed_base_delay_ms: u64,
    pub feed_failure_rate: f64,
    pub feed_batch_size: usize,
    pub feed_initial_jobs: usize,
    pub feed_latency_ms: u64,
    pub region_markers: Vec<String>,
    /// Fixed RNG seed for reproducible match output.
    pub match_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            feed_max_retries: 3,
            feed_base_delay_ms: 800,
            feed_failure_rate: 0.05,
            feed_batch_size: 50,
            feed_initial_jobs: 45,
            feed_latency_ms: 0,
            region_markers: vec!["MN".to_string()],
            match_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: env_or("PORT", "8080")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            feed_max_retries: env_or("FEED_MAX_RETRIES", "3")?,
            feed_base_delay_ms: env_or("FEED_BASE_DELAY_MS", "800")?,
            feed_failure_rate: env_or("FEED_FAILURE_RATE", "0.05")?,
            feed_batch_size: env_or("FEED_BATCH_SIZE", "50")?,
            feed_initial_jobs: env_or("FEED_INITIAL_JOBS", "45")?,
            feed_latency_ms: env_or("FEED_LATENCY_MS", "0")?,
            region_markers: parse_markers(
                &std::env::var("REGION_MARKERS").unwrap_or_else(|_| "MN".to_string()),
            ),
            match_seed: optional_env("MATCH_SEED")?,
        };

        ensure!(
            (0.0..=1.0).contains(&config.feed_failure_rate),
            "FEED_FAILURE_RATE must be between 0 and 1, got {}",
            config.feed_failure_rate
        );

        Ok(config)
    }
}

fn env_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}

fn parse_markers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
