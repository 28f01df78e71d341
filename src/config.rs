//! Runtime configuration, read from the environment.

use std::env;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SLIDING_WINDOW_SIZE: u32 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid APPRAISE_SLIDING_WINDOW value '{value}': {source}")]
    InvalidWindowSize {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the agent backend, without a trailing slash.
    pub base_url: String,
    /// How many prior turns the agent keeps in context.
    pub sliding_window_size: u32,
    /// Optional log file path; logging is disabled when unset.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sliding_window_size: DEFAULT_SLIDING_WINDOW_SIZE,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = env::var("APPRAISE_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(raw) = env::var("APPRAISE_SLIDING_WINDOW") {
            config.sliding_window_size =
                raw.parse()
                    .map_err(|source| ConfigError::InvalidWindowSize { value: raw, source })?;
        }
        if let Ok(path) = env::var("APPRAISE_LOG_FILE") {
            config.log_file = Some(path);
        }

        Ok(config)
    }
}
