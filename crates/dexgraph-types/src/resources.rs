//! Resource references as they appear in upstream documents.
//!
//! The upstream API links documents together with `{ name, url }` pairs.
//! [`EntitySummary`] is the reference to a catalog entity (or its species);
//! [`NamedResource`] covers every other named link (types, stats, moves,
//! evolution triggers). [`ApiResource`] is an unnamed `{ url }` link.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Path segment of the species resource family.
pub const SPECIES_SEGMENT: &str = "pokemon-species";

/// Path segment of the detail resource family.
pub const DETAIL_SEGMENT: &str = "pokemon";

/// A reference to a single catalog entity, as returned by listing calls and
/// embedded in evolution chains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntitySummary {
    /// Entity name (e.g. `bulbasaur`).
    pub name: String,
    /// Resource URL of the entity document.
    pub url: String,
}

impl EntitySummary {
    /// Create a summary from a name and URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Rewrite a species-resource reference into a detail-resource reference.
    ///
    /// Only the first `pokemon-species` segment is substituted; URLs without
    /// one are returned unchanged.
    #[must_use]
    pub fn into_detail_reference(self) -> Self {
        Self {
            url: self.url.replacen(SPECIES_SEGMENT, DETAIL_SEGMENT, 1),
            name: self.name,
        }
    }
}

/// A named link to any non-entity resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g. `grass`, `hp`, `level-up`).
    pub name: String,
    /// Resource URL.
    #[serde(default)]
    pub url: String,
}

/// An unnamed link to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    /// Resource URL.
    pub url: String,
}
