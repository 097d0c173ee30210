//! Upstream document shapes.
//!
//! Only the fields the aggregator reads are modelled; everything else in the
//! upstream payloads is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::evolution::EvolutionNode;
use crate::resources::{ApiResource, EntitySummary, NamedResource};

/// The base entity detail document (`/pokemon/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDocument {
    /// Stable integer identifier.
    pub id: u32,
    /// Entity name.
    pub name: String,
    /// Declared types, primary type first.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Base stats in upstream order.
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    /// Abilities in upstream order.
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Learnable moves in upstream order.
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    /// Link to the species document.
    pub species: EntitySummary,
    /// URL of the location-area encounter list.
    pub location_area_encounters: String,
}

impl PokemonDocument {
    /// Type names in declaration order.
    pub fn type_names(&self) -> Vec<String> {
        self.types
            .iter()
            .map(|slot| slot.type_ref.name.clone())
            .collect()
    }
}

/// One declared type of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Declaration slot (1 = primary).
    #[serde(default)]
    pub slot: u32,
    /// The type reference.
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// One base stat of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    /// Base value of the stat.
    pub base_stat: u32,
    /// Effort value yield.
    #[serde(default)]
    pub effort: u32,
    /// The stat reference.
    pub stat: NamedResource,
}

/// One ability of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    /// The ability reference.
    pub ability: NamedResource,
    /// Whether this is a hidden ability.
    #[serde(default)]
    pub is_hidden: bool,
    /// Ability slot.
    #[serde(default)]
    pub slot: u32,
}

/// One learnable move of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    /// The move reference.
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

/// One row of the location-area encounter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaEncounter {
    /// The location area where the entity can be encountered.
    pub location_area: NamedResource,
}

/// The species document (`/pokemon-species/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDocument {
    /// Species identifier.
    #[serde(default)]
    pub id: u32,
    /// Species name.
    #[serde(default)]
    pub name: String,
    /// Link to the evolution chain this species belongs to.
    pub evolution_chain: ApiResource,
}

/// The evolution-chain document (`/evolution-chain/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainDocument {
    /// Chain identifier.
    #[serde(default)]
    pub id: u32,
    /// Root node of the chain (the base form). `None` when upstream sends an
    /// empty or chainless document.
    #[serde(default)]
    pub chain: Option<EvolutionNode>,
}

/// A single page of the entity listing (`/pokemon?limit=N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDocument {
    /// Total number of entities upstream.
    #[serde(default)]
    pub count: u32,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Entities on this page.
    #[serde(default)]
    pub results: Vec<EntitySummary>,
}
