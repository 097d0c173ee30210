//! Error types for the aggregator.
//!
//! [`TransportError`] covers any failed remote fetch. In the detail path it is
//! escalated into an [`AggregationError`] that names the failed stage; in the
//! roster path it is caught per item and turned into a skip. Lookup misses
//! (image or type) never surface as errors.

use std::fmt;

/// A remote fetch failed.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        /// The requested URL.
        url: String,
        /// The underlying HTTP client error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The body was not a document of the expected shape.
    #[error("failed to decode document from {url}: {source}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

impl TransportError {
    /// The URL whose fetch failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

/// The fetches of the detail path, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    /// The base entity detail document.
    BaseEntity,
    /// The location-area encounter list.
    Encounters,
    /// The species document.
    Species,
    /// The evolution-chain document.
    EvolutionChain,
}

impl FetchStage {
    /// Stable snake-case name for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseEntity => "base_entity",
            Self::Encounters => "encounters",
            Self::Species => "species",
            Self::EvolutionChain => "evolution_chain",
        }
    }
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required fetch of the detail path failed; no profile was produced.
#[derive(Debug, thiserror::Error)]
#[error("failed to aggregate profile for {entity_id} at stage {stage}: {source}")]
pub struct AggregationError {
    /// The entity whose profile was requested.
    pub entity_id: String,
    /// Which fetch failed.
    pub stage: FetchStage,
    /// The transport failure.
    #[source]
    pub source: TransportError,
}

impl AggregationError {
    /// Wrap a transport failure at the given stage.
    pub fn new(entity_id: impl Into<String>, stage: FetchStage, source: TransportError) -> Self {
        Self {
            entity_id: entity_id.into(),
            stage,
            source,
        }
    }
}

/// Configuration is invalid or could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value was present but invalid.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Setting name (environment variable or YAML key).
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Installing the global tracing subscriber failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(pub String);
