//! Profile and roster aggregation for the dexgraph creature catalog.
//!
//! The upstream API spreads one creature across several documents. This
//! crate fetches and stitches them into the two records the display layer
//! consumes:
//!
//! ```text
//! listing --> RosterBuilder ----> Vec<RosterEntry>          (list view)
//! entity id --> DetailAggregator --> CreatureProfile --> ProfileSink (detail view)
//! ```
//!
//! Both entry points resolve images from the [`Catalog`]; the detail path
//! also flattens the evolution chain. All network access goes through the
//! [`Fetcher`] trait.
//!
//! # Modules
//!
//! - [`client`] -- Wiring of config, catalog and fetcher.
//! - [`config`] -- Environment and YAML configuration.
//! - [`detail`] -- Four-document profile aggregation.
//! - [`error`] -- Transport, aggregation, config and telemetry errors.
//! - [`evolution`] -- Evolution-tree flattening and level lookup.
//! - [`fetch`] -- The fetch capability, over HTTP or in memory.
//! - [`listing`] -- The single-call entity listing.
//! - [`roster`] -- Per-item, failure-isolated roster building.
//! - [`routes`] -- Upstream URL construction.
//! - [`sink`] -- Hand-off to the state collaborator.
//! - [`telemetry`] -- `tracing` subscriber setup.
//!
//! [`Catalog`]: dexgraph_catalog::Catalog

pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod evolution;
pub mod fetch;
pub mod listing;
pub mod roster;
pub mod routes;
pub mod sink;
pub mod telemetry;

pub use client::{ClientError, DexClient};
pub use config::{AggregatorConfig, DEFAULT_API_BASE_URL, LogFormat};
pub use detail::{DetailAggregator, ProfileLoad, assemble_profile, encounter_label};
pub use error::{AggregationError, ConfigError, FetchStage, TelemetryError, TransportError};
pub use evolution::{evolution_level_of, flatten};
pub use fetch::{Fetcher, HttpFetcher, MemoryFetcher, fetch_document};
pub use listing::list_summaries;
pub use roster::{RosterBuilder, RosterOutcome, SkipReason};
pub use routes::ApiRoutes;
pub use sink::{ProfileSink, ProfileSlot};
pub use telemetry::init_tracing;
