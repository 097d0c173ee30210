//! Roster building for list and grid views.
//!
//! Each summary is resolved on its own: fetch its detail document, classify
//! its types, resolve its image. A failed fetch or a missing image turns that
//! item into a [`RosterOutcome::Skipped`]; the batch itself never fails.
//! Outcomes come back in input order regardless of which fetch finishes
//! first.

use std::sync::Arc;

use dexgraph_catalog::Catalog;
use dexgraph_types::{EntitySummary, RosterEntry, TypeSlot};
use futures::StreamExt;
use futures::stream;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::TransportError;
use crate::fetch::{Fetcher, fetch_document};

/// The slice of a detail document a roster entry needs.
#[derive(Debug, Deserialize)]
struct RosterDocument {
    id: u32,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

/// Why a summary produced no roster entry.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The detail document could not be fetched.
    #[error("detail fetch failed: {0}")]
    Fetch(#[from] TransportError),

    /// Neither image table has an entry for the fetched id.
    #[error("no image for id {id}")]
    ImageMissing {
        /// Identifier from the fetched document.
        id: u32,
    },
}

/// The result of resolving one summary.
#[derive(Debug)]
pub enum RosterOutcome {
    /// The summary produced a valid entry.
    Entry(RosterEntry),
    /// The summary was dropped.
    Skipped {
        /// Name from the summary.
        name: String,
        /// Why it was dropped.
        reason: SkipReason,
    },
}

impl RosterOutcome {
    /// The entry, if this outcome produced one.
    pub fn into_entry(self) -> Option<RosterEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Skipped { .. } => None,
        }
    }

    /// Whether this outcome was skipped.
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Builds roster entries from entity summaries.
#[derive(Debug, Clone)]
pub struct RosterBuilder<F> {
    fetcher: F,
    catalog: Arc<Catalog>,
    concurrency: usize,
}

impl<F: Fetcher> RosterBuilder<F> {
    /// Create a builder that fetches up to `concurrency` entries at once.
    ///
    /// A concurrency of 0 is treated as 1 (strictly sequential).
    pub fn new(fetcher: F, catalog: Arc<Catalog>, concurrency: usize) -> Self {
        Self {
            fetcher,
            catalog,
            concurrency: concurrency.max(1),
        }
    }

    /// Build the roster, keeping only valid entries in input order.
    pub async fn build_roster(&self, summaries: &[EntitySummary]) -> Vec<RosterEntry> {
        self.roster_outcomes(summaries)
            .await
            .into_iter()
            .filter_map(RosterOutcome::into_entry)
            .collect()
    }

    /// Resolve every summary, one outcome per input in input order.
    pub async fn roster_outcomes(&self, summaries: &[EntitySummary]) -> Vec<RosterOutcome> {
        let outcomes: Vec<RosterOutcome> = stream::iter(summaries)
            .map(|summary| self.resolve_entry(summary))
            .buffered(self.concurrency)
            .collect()
            .await;

        let skipped = outcomes.iter().filter(|o| o.is_skipped()).count();
        info!(
            requested = summaries.len(),
            built = outcomes.len().saturating_sub(skipped),
            skipped = skipped,
            "roster built"
        );
        outcomes
    }

    async fn resolve_entry(&self, summary: &EntitySummary) -> RosterOutcome {
        let document: RosterDocument = match fetch_document(&self.fetcher, &summary.url).await {
            Ok(document) => document,
            Err(e) => {
                warn!(
                    name = summary.name,
                    url = summary.url,
                    error = %e,
                    "skipping roster entry, detail fetch failed"
                );
                return RosterOutcome::Skipped {
                    name: summary.name.clone(),
                    reason: SkipReason::Fetch(e),
                };
            }
        };

        let types = self
            .catalog
            .types
            .classify(document.types.iter().map(|slot| slot.type_ref.name.as_str()));

        let Some(image) = self.catalog.images.resolve(document.id) else {
            debug!(
                name = summary.name,
                id = document.id,
                "skipping roster entry, no image"
            );
            return RosterOutcome::Skipped {
                name: summary.name.clone(),
                reason: SkipReason::ImageMissing { id: document.id },
            };
        };

        RosterOutcome::Entry(RosterEntry {
            name: summary.name.clone(),
            id: document.id,
            image: image.to_owned(),
            types,
        })
    }
}
