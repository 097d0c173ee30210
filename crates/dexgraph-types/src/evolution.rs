//! Evolution chain shapes.
//!
//! [`EvolutionNode`] is the recursive tree exactly as the upstream
//! evolution-chain document delivers it. [`EvolutionEntry`] is one row of the
//! flattened, leveled sequence that view models carry.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::resources::{EntitySummary, NamedResource};

/// One node of an upstream evolution tree.
///
/// The root is the base form; children are subsequent forms. More than one
/// child means alternate evolution paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    /// The species at this stage of the chain.
    pub species: EntitySummary,
    /// Forms this species can evolve into, in upstream order.
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
    /// Conditions for reaching this node from its parent.
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

impl EvolutionNode {
    /// Create a node with no children and no evolution details.
    pub const fn leaf(species: EntitySummary) -> Self {
        Self {
            species,
            evolves_to: Vec::new(),
            evolution_details: Vec::new(),
        }
    }

    /// Create a node with the given children.
    pub const fn with_children(species: EntitySummary, evolves_to: Vec<Self>) -> Self {
        Self {
            species,
            evolves_to,
            evolution_details: Vec::new(),
        }
    }
}

/// The trigger and requirements of a single evolution edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    /// Minimum level required, when the trigger is level based.
    #[serde(default)]
    pub min_level: Option<u32>,
    /// What causes the evolution (`level-up`, `use-item`, `trade`, ...).
    pub trigger: NamedResource,
}

/// A flattened evolution chain row: one species and its depth in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EvolutionEntry {
    /// The species, with its URL pointing at the detail resource.
    pub pokemon: EntitySummary,
    /// Depth in the chain; the base form is level 1.
    pub level: u32,
}
