//! Shared type definitions for the dexgraph aggregator.
//!
//! This crate holds both sides of the aggregation boundary: the upstream
//! document shapes the fetchers decode, and the view models handed to the
//! display layer. View models derive `ts-rs` so the UI consumes the same
//! definitions as `TypeScript`.
//!
//! # Modules
//!
//! - [`resources`] -- `{ name, url }` links and the species/detail URL rewrite
//! - [`documents`] -- Upstream entity, species, encounter, chain and listing documents
//! - [`evolution`] -- Recursive evolution tree and its flattened rows
//! - [`profile`] -- The full detail-view record
//! - [`roster`] -- List-view entries and type classifications

pub mod documents;
pub mod evolution;
pub mod profile;
pub mod resources;
pub mod roster;

pub use documents::{
    AbilitySlot, EvolutionChainDocument, ListingDocument, LocationAreaEncounter, MoveSlot,
    PokemonDocument, SpeciesDocument, StatSlot, TypeSlot,
};
pub use evolution::{EvolutionDetail, EvolutionEntry, EvolutionNode};
pub use profile::{CreatureAbilities, CreatureProfile, DEFAULT_EVOLUTION_LEVEL, StatValue};
pub use resources::{ApiResource, DETAIL_SEGMENT, EntitySummary, NamedResource, SPECIES_SEGMENT};
pub use roster::{RosterEntry, TypeClassification, TypeMetadata};
