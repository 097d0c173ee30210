//! One-stop wiring of configuration, catalog and fetcher.
//!
//! [`DexClient`] owns the pieces both entry points share and hands out
//! [`DetailAggregator`] and [`RosterBuilder`] instances over them.

use std::sync::Arc;

use dexgraph_catalog::{Catalog, CatalogError};
use dexgraph_types::EntitySummary;
use tracing::info;

use crate::config::AggregatorConfig;
use crate::detail::DetailAggregator;
use crate::error::TransportError;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::listing::list_summaries;
use crate::roster::RosterBuilder;
use crate::routes::ApiRoutes;

/// Errors raised while assembling a [`DexClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A lookup table failed to load.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },

    /// The HTTP client could not be built.
    #[error("transport error: {source}")]
    Transport {
        /// The underlying transport error.
        #[from]
        source: TransportError,
    },
}

/// Shared state behind the detail and roster entry points.
#[derive(Debug, Clone)]
pub struct DexClient<F> {
    fetcher: F,
    routes: ApiRoutes,
    catalog: Arc<Catalog>,
    roster_concurrency: usize,
}

impl DexClient<HttpFetcher> {
    /// Build an HTTP-backed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if a lookup table fails to load or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &AggregatorConfig) -> Result<Self, ClientError> {
        let catalog = Catalog::load(&config.catalog)?;
        let fetcher = HttpFetcher::new(config)?;
        info!(
            api_base_url = config.api_base_url,
            request_timeout_ms = config.request_timeout_ms,
            roster_concurrency = config.roster_concurrency,
            "dexgraph client configured"
        );
        Ok(Self::new(
            fetcher,
            ApiRoutes::new(&config.api_base_url),
            Arc::new(catalog),
            config.roster_concurrency,
        ))
    }
}

impl<F: Fetcher + Clone> DexClient<F> {
    /// Assemble a client from its parts.
    pub const fn new(
        fetcher: F,
        routes: ApiRoutes,
        catalog: Arc<Catalog>,
        roster_concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            routes,
            catalog,
            roster_concurrency,
        }
    }

    /// The lookup tables.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The upstream routes.
    pub const fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    /// A detail aggregator sharing this client's fetcher and catalog.
    pub fn detail(&self) -> DetailAggregator<F> {
        DetailAggregator::new(
            self.fetcher.clone(),
            self.routes.clone(),
            Arc::clone(&self.catalog),
        )
    }

    /// A roster builder sharing this client's fetcher and catalog.
    pub fn roster(&self) -> RosterBuilder<F> {
        RosterBuilder::new(
            self.fetcher.clone(),
            Arc::clone(&self.catalog),
            self.roster_concurrency,
        )
    }

    /// Fetch up to `limit` summaries from the upstream listing.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the listing fetch fails.
    pub async fn list_summaries(&self, limit: u32) -> Result<Vec<EntitySummary>, TransportError> {
        list_summaries(&self.fetcher, &self.routes, limit).await
    }
}
