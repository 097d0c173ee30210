//! Curated lookup tables for the dexgraph aggregator.
//!
//! The catalog is static, externally curated data: two image tables and a
//! type-metadata table. Tables are loaded once and are read-only afterwards,
//! so a [`Catalog`] can be shared behind an `Arc` without locking.
//!
//! # Modules
//!
//! - [`error`] -- Errors raised while loading tables.
//! - [`images`] -- Primary/secondary image tables and the tiered resolver.
//! - [`types`] -- Type name to display metadata table.

pub mod error;
pub mod images;
pub mod types;

use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

pub use error::CatalogError;
pub use images::{ImageResolver, ImageTable, ImageTier};
pub use types::TypeTable;

/// Optional file overrides for the bundled tables.
///
/// Any table left as `None` uses the data compiled into this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogSources {
    /// Path to a primary image table (JSON object keyed by id).
    #[serde(default)]
    pub primary_images: Option<PathBuf>,
    /// Path to a secondary image table (JSON object keyed by id).
    #[serde(default)]
    pub default_images: Option<PathBuf>,
    /// Path to a type-metadata table (JSON object keyed by type name).
    #[serde(default)]
    pub type_table: Option<PathBuf>,
}

/// All lookup tables used by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Tiered image resolver.
    pub images: ImageResolver,
    /// Type-metadata table.
    pub types: TypeTable,
}

impl Catalog {
    /// Create a catalog from already-built tables.
    pub const fn new(images: ImageResolver, types: TypeTable) -> Self {
        Self { images, types }
    }

    /// The tables compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled data is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Ok(Self::new(ImageResolver::bundled()?, TypeTable::bundled()?))
    }

    /// Load the catalog, reading each table from its override file when set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any table fails to read or parse.
    pub fn load(sources: &CatalogSources) -> Result<Self, CatalogError> {
        let bundled = ImageResolver::bundled()?;

        let primary = match &sources.primary_images {
            Some(path) => ImageTable::from_file("primary image", path)?,
            None => bundled.primary().clone(),
        };
        let secondary = match &sources.default_images {
            Some(path) => ImageTable::from_file("default image", path)?,
            None => bundled.secondary().clone(),
        };
        let types = match &sources.type_table {
            Some(path) => TypeTable::from_file(path)?,
            None => TypeTable::bundled()?,
        };

        info!(
            primary_images = primary.len(),
            default_images = secondary.len(),
            types = types.len(),
            "catalog loaded"
        );

        Ok(Self::new(ImageResolver::new(primary, secondary), types))
    }
}
