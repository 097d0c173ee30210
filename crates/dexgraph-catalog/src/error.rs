//! Error types for the `dexgraph-catalog` crate.
//!
//! Lookup misses are not errors; these only cover loading tables.

use std::path::PathBuf;

/// Errors that can occur while loading a lookup table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A table file could not be read.
    #[error("failed to read {table} table from {}: {source}", path.display())]
    Io {
        /// Which table was being loaded.
        table: &'static str,
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A table was not valid JSON of the expected shape.
    #[error("failed to parse {table} table: {source}")]
    Json {
        /// Which table was being parsed.
        table: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// An image table key was not a decimal entity id.
    #[error("invalid entity id {key:?} in {table} table")]
    InvalidId {
        /// Which table contained the key.
        table: &'static str,
        /// The offending key.
        key: String,
    },
}

/// Read a table file into a string.
pub(crate) fn read_table(table: &'static str, path: &std::path::Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        table,
        path: path.to_path_buf(),
        source,
    })
}
