//! List-view projection types.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display and matchup metadata for one type, as curated in the type table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TypeMetadata {
    /// Icon asset for the type.
    pub image: String,
    /// Types this type deals double damage to.
    #[serde(default)]
    pub strength: Vec<String>,
    /// Types this type deals reduced damage to.
    #[serde(default)]
    pub weakness: Vec<String>,
    /// Types that deal reduced damage to this type.
    #[serde(default)]
    pub resistance: Vec<String>,
    /// Types that deal double damage to this type.
    #[serde(default)]
    pub vulnerable: Vec<String>,
}

/// A type an entity possesses, paired with its metadata.
///
/// `metadata` is `None` when the type name is not in the type table.
///
/// Serializes as `{"name": .., "metadata": ..}` rather than a one-key
/// `{name: metadata}` map, so the binding has a fixed shape and unknown
/// types stay representable. Display code wanting the keyed form can fold
/// a `Vec<TypeClassification>` into a map by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TypeClassification {
    /// Type name (`grass`, `poison`, ...).
    pub name: String,
    /// Curated metadata for the type.
    pub metadata: Option<TypeMetadata>,
}

/// One entry of a roster (list/grid display).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RosterEntry {
    /// Name from the listing summary.
    pub name: String,
    /// Identifier from the fetched detail document.
    pub id: u32,
    /// Resolved display image URL.
    pub image: String,
    /// Types in declaration order.
    pub types: Vec<TypeClassification>,
}
