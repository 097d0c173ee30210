//! Configuration for the aggregator.
//!
//! Settings come from a YAML file, from environment variables, or both (the
//! environment overrides the file). Every field has a default, so an empty
//! configuration talks to the public upstream API with the bundled tables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use dexgraph_catalog::CatalogSources;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default upstream API root.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Complete aggregator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AggregatorConfig {
    /// Upstream API root, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Maximum number of roster entries fetched at once.
    #[serde(default = "default_roster_concurrency")]
    pub roster_concurrency: usize,

    /// `User-Agent` header sent upstream.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Optional file overrides for the lookup tables.
    #[serde(default)]
    pub catalog: CatalogSources,
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            roster_concurrency: default_roster_concurrency(),
            user_agent: default_user_agent(),
            log_format: LogFormat::default(),
            catalog: CatalogSources::default(),
        }
    }
}

impl AggregatorConfig {
    /// Load configuration from environment variables on top of the defaults.
    ///
    /// Variables:
    /// - `DEX_API_BASE_URL` -- upstream API root (default `https://pokeapi.co/api/v2`)
    /// - `DEX_REQUEST_TIMEOUT_MS` -- per-request timeout (default 10000)
    /// - `DEX_ROSTER_CONCURRENCY` -- roster fetch concurrency (default 8)
    /// - `DEX_USER_AGENT` -- `User-Agent` header (default `dexgraph/<version>`)
    /// - `DEX_LOG_FORMAT` -- `text` or `json` (default `text`)
    /// - `DEX_PRIMARY_IMAGES` -- primary image table file
    /// - `DEX_DEFAULT_IMAGES` -- secondary image table file
    /// - `DEX_TYPE_TABLE` -- type-metadata table file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable cannot be parsed or the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is rejected.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is rejected.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric or enum value is malformed.
    pub fn apply_overrides<L>(&mut self, lookup: L) -> Result<(), ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DEX_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup("DEX_REQUEST_TIMEOUT_MS") {
            self.request_timeout_ms = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "DEX_REQUEST_TIMEOUT_MS",
                reason: format!("{e}"),
            })?;
        }
        if let Some(raw) = lookup("DEX_ROSTER_CONCURRENCY") {
            self.roster_concurrency = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "DEX_ROSTER_CONCURRENCY",
                reason: format!("{e}"),
            })?;
        }
        if let Some(agent) = lookup("DEX_USER_AGENT") {
            self.user_agent = agent;
        }
        if let Some(raw) = lookup("DEX_LOG_FORMAT") {
            self.log_format = match raw.trim().to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(ConfigError::Invalid {
                        name: "DEX_LOG_FORMAT",
                        reason: format!("unknown format {other:?}"),
                    });
                }
            };
        }
        if let Some(path) = lookup("DEX_PRIMARY_IMAGES") {
            self.catalog.primary_images = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("DEX_DEFAULT_IMAGES") {
            self.catalog.default_images = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("DEX_TYPE_TABLE") {
            self.catalog.type_table = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty base URL, a zero timeout
    /// or a zero roster concurrency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim_end_matches('/').is_empty() {
            return Err(ConfigError::Invalid {
                name: "api_base_url",
                reason: String::from("must not be empty"),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                name: "request_timeout_ms",
                reason: String::from("must be greater than zero"),
            });
        }
        if self.roster_concurrency == 0 {
            return Err(ConfigError::Invalid {
                name: "roster_concurrency",
                reason: String::from("must be at least 1"),
            });
        }
        Ok(())
    }

    /// The per-request timeout.
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

const fn default_request_timeout_ms() -> u64 {
    10_000
}

const fn default_roster_concurrency() -> usize {
    8
}

fn default_user_agent() -> String {
    format!("dexgraph/{}", env!("CARGO_PKG_VERSION"))
}
