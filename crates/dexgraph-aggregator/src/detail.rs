//! Detail aggregation: one entity id in, one [`CreatureProfile`] out.
//!
//! The profile is stitched together from four documents with this
//! dependency shape:
//!
//! ```text
//!                  +--> encounters (b) --+
//! base entity (a) -+                     +--> evolution chain (d)
//!                  +--> species    (c) --+
//! ```
//!
//! (b) and (c) only need URLs embedded in (a) and are fetched concurrently.
//! (d) needs the chain URL from (c) and starts once both have completed. Any
//! failed fetch aborts the whole aggregation; a partial profile is never
//! returned or published.

use std::future::Future;
use std::sync::Arc;

use dexgraph_catalog::Catalog;
use dexgraph_types::{
    CreatureAbilities, CreatureProfile, EvolutionChainDocument, LocationAreaEncounter,
    PokemonDocument, SpeciesDocument, StatValue,
};
use tracing::{debug, info, warn};

use crate::error::{AggregationError, FetchStage, TransportError};
use crate::evolution::{evolution_level_of, flatten};
use crate::fetch::{Fetcher, fetch_document};
use crate::routes::ApiRoutes;
use crate::sink::ProfileSink;

/// Result of a cancellable profile load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileLoad {
    /// The profile was built and handed to the sink.
    Published,
    /// Cancellation won the race; nothing was published.
    Cancelled,
}

/// Builds full profiles from the upstream API.
#[derive(Debug, Clone)]
pub struct DetailAggregator<F> {
    fetcher: F,
    routes: ApiRoutes,
    catalog: Arc<Catalog>,
}

impl<F: Fetcher> DetailAggregator<F> {
    /// Create an aggregator over a fetcher, upstream routes and lookup tables.
    pub const fn new(fetcher: F, routes: ApiRoutes, catalog: Arc<Catalog>) -> Self {
        Self {
            fetcher,
            routes,
            catalog,
        }
    }

    /// Build the profile of `entity_id` (numeric id or name) with a
    /// pre-resolved display image.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError`] naming the first fetch that failed.
    pub async fn build_profile(
        &self,
        entity_id: &str,
        resolved_image: &str,
    ) -> Result<CreatureProfile, AggregationError> {
        info!(entity_id = entity_id, "building profile");

        let base_url = self.routes.entity_url(entity_id);
        let base: PokemonDocument = fetch_document(&self.fetcher, &base_url)
            .await
            .map_err(|e| self.fail(entity_id, FetchStage::BaseEntity, e))?;
        debug!(entity_id = entity_id, id = base.id, "base entity fetched");

        let encounters = async {
            fetch_document::<Vec<LocationAreaEncounter>, _>(
                &self.fetcher,
                &base.location_area_encounters,
            )
            .await
            .map_err(|e| self.fail(entity_id, FetchStage::Encounters, e))
        };
        let species = async {
            fetch_document::<SpeciesDocument, _>(&self.fetcher, &base.species.url)
                .await
                .map_err(|e| self.fail(entity_id, FetchStage::Species, e))
        };
        let (encounters, species) = tokio::try_join!(encounters, species)?;

        let chain: EvolutionChainDocument =
            fetch_document(&self.fetcher, &species.evolution_chain.url)
                .await
                .map_err(|e| self.fail(entity_id, FetchStage::EvolutionChain, e))?;

        let profile = assemble_profile(base, resolved_image, &encounters, &chain);
        info!(
            entity_id = entity_id,
            id = profile.id,
            encounters = profile.encounters.len(),
            evolution_entries = profile.evolution.len(),
            evolution_level = profile.evolution_level,
            "profile built"
        );
        Ok(profile)
    }

    /// Build the profile of a numeric id, resolving its image from the catalog.
    ///
    /// An id with no image in either table gets an empty image string.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError`] naming the first fetch that failed.
    pub async fn build_profile_for_id(
        &self,
        id: u32,
    ) -> Result<CreatureProfile, AggregationError> {
        let image = self.catalog.images.resolve(id).unwrap_or_default().to_owned();
        self.build_profile(&id.to_string(), &image).await
    }

    /// Build a profile and hand it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError`] if the build fails; the sink is untouched.
    pub async fn load_profile<S>(
        &self,
        entity_id: &str,
        resolved_image: &str,
        sink: &S,
    ) -> Result<(), AggregationError>
    where
        S: ProfileSink + ?Sized,
    {
        let profile = self.build_profile(entity_id, resolved_image).await?;
        sink.publish(profile);
        Ok(())
    }

    /// Like [`load_profile`](Self::load_profile), but abandons the load as soon
    /// as `cancel` completes.
    ///
    /// In-flight fetches are dropped on cancellation and nothing reaches the
    /// sink.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError`] if the build fails before cancellation.
    pub async fn load_profile_until<S, C>(
        &self,
        entity_id: &str,
        resolved_image: &str,
        sink: &S,
        cancel: C,
    ) -> Result<ProfileLoad, AggregationError>
    where
        S: ProfileSink + ?Sized,
        C: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                debug!(entity_id = entity_id, "profile load cancelled");
                Ok(ProfileLoad::Cancelled)
            }
            profile = self.build_profile(entity_id, resolved_image) => {
                sink.publish(profile?);
                Ok(ProfileLoad::Published)
            }
        }
    }

    fn fail(
        &self,
        entity_id: &str,
        stage: FetchStage,
        source: TransportError,
    ) -> AggregationError {
        warn!(
            entity_id = entity_id,
            stage = stage.as_str(),
            url = source.url(),
            base_url = self.routes.base_url(),
            error = %source,
            "profile aggregation failed"
        );
        AggregationError::new(entity_id, stage, source)
    }
}

/// Merge the fetched documents into one profile.
///
/// A chain document without a root node yields an empty `evolution` and the
/// default evolution level.
pub fn assemble_profile(
    base: PokemonDocument,
    resolved_image: &str,
    encounters: &[LocationAreaEncounter],
    chain: &EvolutionChainDocument,
) -> CreatureProfile {
    let evolution = chain.chain.as_ref().map(flatten).unwrap_or_default();
    let evolution_level = evolution_level_of(&evolution, &base.name);
    let types = base.type_names();

    CreatureProfile {
        id: base.id,
        types,
        image: resolved_image.to_owned(),
        stats: base
            .stats
            .into_iter()
            .map(|slot| StatValue {
                name: slot.stat.name,
                value: slot.base_stat,
            })
            .collect(),
        encounters: encounters
            .iter()
            .map(|encounter| encounter_label(&encounter.location_area.name))
            .collect(),
        pokemon_abilities: CreatureAbilities {
            abilities: base
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            moves: base.moves.into_iter().map(|slot| slot.move_ref.name).collect(),
        },
        name: base.name,
        evolution,
        evolution_level,
    }
}

/// Display form of a location-area name: `viridian-forest-area` becomes
/// `VIRIDIAN FOREST AREA`.
pub fn encounter_label(location_area: &str) -> String {
    location_area.to_uppercase().replace('-', " ")
}

#[cfg(test)]
mod tests {
    use dexgraph_types::{EntitySummary, EvolutionNode, NamedResource, StatSlot, TypeSlot};

    use super::*;

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_owned(),
            url: String::new(),
        }
    }

    fn base_document(name: &str) -> PokemonDocument {
        PokemonDocument {
            id: 2,
            name: name.to_owned(),
            types: vec![
                TypeSlot {
                    slot: 1,
                    type_ref: named("grass"),
                },
                TypeSlot {
                    slot: 2,
                    type_ref: named("poison"),
                },
            ],
            stats: vec![
                StatSlot {
                    base_stat: 60,
                    effort: 0,
                    stat: named("hp"),
                },
                StatSlot {
                    base_stat: 62,
                    effort: 0,
                    stat: named("attack"),
                },
            ],
            abilities: Vec::new(),
            moves: Vec::new(),
            species: EntitySummary::new(name, "http://api/pokemon-species/2/"),
            location_area_encounters: String::from("http://api/pokemon/2/encounters"),
        }
    }

    fn chain() -> EvolutionChainDocument {
        EvolutionChainDocument {
            id: 1,
            chain: Some(EvolutionNode::with_children(
                EntitySummary::new("bulbasaur", "http://api/pokemon-species/1/"),
                vec![EvolutionNode::leaf(EntitySummary::new(
                    "ivysaur",
                    "http://api/pokemon-species/2/",
                ))],
            )),
        }
    }

    #[test]
    fn encounter_labels_are_upper_cased_and_spaced() {
        assert_eq!(encounter_label("viridian-forest-area"), "VIRIDIAN FOREST AREA");
        assert_eq!(encounter_label("cerulean-cave-1f"), "CERULEAN CAVE 1F");
        assert_eq!(encounter_label("route"), "ROUTE");
    }

    #[test]
    fn assemble_sets_level_from_own_chain_position() {
        let profile = assemble_profile(base_document("ivysaur"), "2.gif", &[], &chain());
        assert_eq!(profile.evolution_level, 2);
        assert_eq!(profile.types, vec!["grass", "poison"]);
        assert_eq!(
            profile.stats,
            vec![
                StatValue {
                    name: String::from("hp"),
                    value: 60,
                },
                StatValue {
                    name: String::from("attack"),
                    value: 62,
                },
            ]
        );
        assert_eq!(profile.image, "2.gif");
    }

    #[test]
    fn assemble_defaults_level_when_absent_from_chain() {
        let profile = assemble_profile(base_document("ivysaur-mega"), "", &[], &chain());
        assert_eq!(profile.evolution_level, 1);
        assert_eq!(profile.evolution.len(), 2);
    }

    #[test]
    fn assemble_handles_chainless_document() {
        let empty = EvolutionChainDocument {
            id: 1,
            chain: None,
        };
        let profile = assemble_profile(base_document("ivysaur"), "", &[], &empty);
        assert!(profile.evolution.is_empty());
        assert_eq!(profile.evolution_level, 1);
    }
}
