//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::youtube::{ClientConfig, YOUTUBE_API_MAX_RESULTS};

/// Environment variable consulted when the config file has no API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("No YouTube API key: set `api_key` in the config file or the YOUTUBE_API_KEY environment variable")]
    MissingApiKey,
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API credential; falls back to the environment when unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// YouTube Data API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Regions whose trending charts are aggregated
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,

    /// Fixed category the charts are restricted to (25 = News & Politics)
    #[serde(default = "default_category_id")]
    pub category_id: String,

    /// Result cap per region, bounded by the API maximum
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Cache time-to-live in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_regions() -> Vec<String> {
    vec!["US".to_string()]
}

fn default_category_id() -> String {
    "25".to_string()
}

fn default_max_results() -> u32 {
    40
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            regions: default_regions(),
            category_id: default_category_id(),
            max_results: default_max_results(),
            cache_ttl_secs: default_cache_ttl_secs(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.regions.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one region must be configured".to_string(),
            ));
        }

        if self.max_results == 0 || self.max_results > YOUTUBE_API_MAX_RESULTS {
            return Err(ConfigError::ValidationError(format!(
                "max_results must be between 1 and {}",
                YOUTUBE_API_MAX_RESULTS
            )));
        }

        if self.category_id.is_empty() {
            return Err(ConfigError::ValidationError(
                "category_id must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the API key from the config file or the environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Client settings with the resolved API key filled in.
    pub fn client_config(&self, api_key: String) -> ClientConfig {
        ClientConfig {
            api_base: self.api_base.clone(),
            api_key,
            category_id: self.category_id.clone(),
            max_results: self.max_results,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Cache TTL as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
