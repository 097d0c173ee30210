//! Type-metadata table.
//!
//! Maps a type name to its curated display/matchup metadata. Classifying an
//! entity keeps every declared type in order; names missing from the table
//! come back with no metadata.

use std::collections::BTreeMap;
use std::path::Path;

use dexgraph_types::{TypeClassification, TypeMetadata};
use tracing::debug;

use crate::error::{CatalogError, read_table};

/// Bundled type table covering the eighteen standard types.
const BUNDLED_TYPES: &str = include_str!("../data/types.json");

/// Lookup table from type name to [`TypeMetadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTable {
    entries: BTreeMap<String, TypeMetadata>,
}

impl TypeTable {
    /// Build a table from `(name, metadata)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeMetadata)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, meta)| (name.into(), meta))
                .collect(),
        }
    }

    /// Parse a JSON object keyed by type name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the input does not match the shape.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let entries = serde_json::from_str(json)
            .map_err(|source| CatalogError::Json { table: "type", source })?;
        Ok(Self { entries })
    }

    /// Load a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or
    /// [`CatalogError::Json`] if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = read_table("type", path)?;
        Self::parse(&json)
    }

    /// The table compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the bundled data is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::parse(BUNDLED_TYPES)
    }

    /// Metadata for one type name.
    pub fn get(&self, name: &str) -> Option<&TypeMetadata> {
        self.entries.get(name)
    }

    /// Classify declared type names, preserving their order.
    pub fn classify<I, S>(&self, names: I) -> Vec<TypeClassification>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                let metadata = self.get(name).cloned();
                if metadata.is_none() {
                    debug!(type_name = name, "type missing from type table");
                }
                TypeClassification {
                    name: name.to_owned(),
                    metadata,
                }
            })
            .collect()
    }

    /// Number of types in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
