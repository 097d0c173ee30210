//! The full detail-view record for one entity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::evolution::EvolutionEntry;

/// Level reported when an entity is not found in its own evolution chain.
pub const DEFAULT_EVOLUTION_LEVEL: u32 = 1;

/// Aggregated profile of one entity, built from the base, encounter, species
/// and evolution-chain documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CreatureProfile {
    /// Stable integer identifier.
    pub id: u32,
    /// Entity name.
    pub name: String,
    /// Display image URL, resolved by the caller.
    pub image: String,
    /// Type names, primary type first.
    pub types: Vec<String>,
    /// Base stats in upstream order.
    pub stats: Vec<StatValue>,
    /// Location-area display strings (`VIRIDIAN FOREST AREA`).
    pub encounters: Vec<String>,
    /// Ability and move names.
    pub pokemon_abilities: CreatureAbilities,
    /// Flattened evolution chain in preorder.
    pub evolution: Vec<EvolutionEntry>,
    /// Level at which this entity appears in [`Self::evolution`].
    pub evolution_level: u32,
}

/// A named base stat value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatValue {
    /// Stat name (`hp`, `attack`, ...).
    pub name: String,
    /// Base value.
    pub value: u32,
}

/// Ability and move names of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CreatureAbilities {
    /// Ability names in upstream order.
    pub abilities: Vec<String>,
    /// Move names in upstream order.
    pub moves: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resources::EntitySummary;

    #[test]
    fn profile_serializes_with_camel_case_keys() {
        let profile = CreatureProfile {
            id: 25,
            name: String::from("pikachu"),
            image: String::from("25.gif"),
            types: vec![String::from("electric")],
            stats: vec![StatValue {
                name: String::from("speed"),
                value: 90,
            }],
            encounters: vec![String::from("VIRIDIAN FOREST AREA")],
            pokemon_abilities: CreatureAbilities {
                abilities: vec![String::from("static")],
                moves: vec![String::from("thunder-shock")],
            },
            evolution: vec![EvolutionEntry {
                pokemon: EntitySummary::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/"),
                level: 2,
            }],
            evolution_level: 2,
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["evolutionLevel"], 2);
        assert_eq!(value["pokemonAbilities"]["moves"][0], "thunder-shock");
        assert_eq!(value["evolution"][0]["pokemon"]["name"], "pikachu");
    }
}
