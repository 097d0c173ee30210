//! Tiered image lookup.
//!
//! An entity's display image comes from the primary table (animated art,
//! partial coverage) when it has an entry there, otherwise from the secondary
//! table (static art, full coverage). Both tables are local; resolving never
//! touches the network.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::{CatalogError, read_table};

/// Bundled primary table: animated sprites.
const BUNDLED_PRIMARY: &str = include_str!("../data/images.json");

/// Bundled secondary table: official artwork.
const BUNDLED_SECONDARY: &str = include_str!("../data/default_images.json");

/// Which table served an image lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTier {
    /// Found in the primary table.
    Primary,
    /// Missing from the primary table, found in the secondary table.
    Secondary,
}

impl ImageTier {
    /// Stable lowercase name for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// A single `id -> url` image table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTable {
    entries: BTreeMap<u32, String>,
}

impl ImageTable {
    /// Build a table from `(id, url)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, url)| (id, url.into()))
                .collect(),
        }
    }

    /// Parse a JSON object keyed by decimal id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the input is not a string-to-string
    /// object, or [`CatalogError::InvalidId`] if a key is not a `u32`.
    pub fn parse(table: &'static str, json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|source| CatalogError::Json { table, source })?;

        let mut entries = BTreeMap::new();
        for (key, url) in raw {
            let id = key
                .trim()
                .parse::<u32>()
                .map_err(|_parse| CatalogError::InvalidId { table, key: key.clone() })?;
            entries.insert(id, url);
        }
        Ok(Self { entries })
    }

    /// Load a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`ImageTable::parse`].
    pub fn from_file(table: &'static str, path: &Path) -> Result<Self, CatalogError> {
        let json = read_table(table, path)?;
        Self::parse(table, &json)
    }

    /// Look up the URL for an id.
    pub fn get(&self, id: u32) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Number of ids in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Two-tier image resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResolver {
    primary: ImageTable,
    secondary: ImageTable,
}

impl ImageResolver {
    /// Create a resolver over a primary and a secondary table.
    pub const fn new(primary: ImageTable, secondary: ImageTable) -> Self {
        Self { primary, secondary }
    }

    /// The tables compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled data is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Ok(Self::new(
            ImageTable::parse("primary image", BUNDLED_PRIMARY)?,
            ImageTable::parse("default image", BUNDLED_SECONDARY)?,
        ))
    }

    /// Resolve the display image for an id, primary table first.
    pub fn resolve(&self, id: u32) -> Option<&str> {
        self.lookup(id).map(|(url, _tier)| url)
    }

    /// Report which tier would serve an id.
    pub fn tier(&self, id: u32) -> Option<ImageTier> {
        self.lookup(id).map(|(_url, tier)| tier)
    }

    /// The primary table.
    pub const fn primary(&self) -> &ImageTable {
        &self.primary
    }

    /// The secondary table.
    pub const fn secondary(&self) -> &ImageTable {
        &self.secondary
    }

    fn lookup(&self, id: u32) -> Option<(&str, ImageTier)> {
        if let Some(url) = self.primary.get(id) {
            return Some((url, ImageTier::Primary));
        }
        let found = self.secondary.get(id).map(|url| (url, ImageTier::Secondary));
        if found.is_none() {
            debug!(id = id, "no image in either table");
        }
        found
    }
}
