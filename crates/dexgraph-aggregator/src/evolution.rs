//! Evolution chain flattening.
//!
//! Turns the recursive [`EvolutionNode`] tree into a preorder list of
//! [`EvolutionEntry`] rows: a node comes before its descendants, siblings in
//! upstream order, and each row's level is its depth (root = 1). Every node
//! yields exactly one row; branches reaching the same species are not merged.

use dexgraph_types::{DEFAULT_EVOLUTION_LEVEL, EvolutionEntry, EvolutionNode};

/// Flatten an evolution tree into preorder rows.
///
/// Walks with an explicit stack, so deep chains do not grow the call stack.
/// Species URLs are rewritten to detail-resource URLs.
pub fn flatten(root: &EvolutionNode) -> Vec<EvolutionEntry> {
    let mut entries = Vec::new();
    let mut stack: Vec<(&EvolutionNode, u32)> = vec![(root, 1)];

    while let Some((node, level)) = stack.pop() {
        entries.push(EvolutionEntry {
            pokemon: node.species.clone().into_detail_reference(),
            level,
        });

        // Reversed so the first child is popped first.
        let child_level = level.saturating_add(1);
        stack.extend(node.evolves_to.iter().rev().map(|child| (child, child_level)));
    }

    entries
}

/// Level of the first row whose species is `name`, or
/// [`DEFAULT_EVOLUTION_LEVEL`] when the name is absent from the chain.
pub fn evolution_level_of(entries: &[EvolutionEntry], name: &str) -> u32 {
    entries
        .iter()
        .find(|entry| entry.pokemon.name == name)
        .map_or(DEFAULT_EVOLUTION_LEVEL, |entry| entry.level)
}

#[cfg(test)]
mod tests {
    use dexgraph_types::EntitySummary;

    use super::*;

    fn species(name: &str, id: u32) -> EntitySummary {
        EntitySummary::new(name, format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"))
    }

    fn rows(entries: &[EvolutionEntry]) -> Vec<(&str, u32)> {
        entries
            .iter()
            .map(|e| (e.pokemon.name.as_str(), e.level))
            .collect()
    }

    #[test]
    fn branching_tree_flattens_in_preorder() {
        // A -> [B -> [C], D]
        let tree = EvolutionNode::with_children(
            species("a", 1),
            vec![
                EvolutionNode::with_children(
                    species("b", 2),
                    vec![EvolutionNode::leaf(species("c", 3))],
                ),
                EvolutionNode::leaf(species("d", 4)),
            ],
        );

        let entries = flatten(&tree);
        assert_eq!(rows(&entries), vec![("a", 1), ("b", 2), ("c", 3), ("d", 2)]);
    }

    #[test]
    fn single_node_chain_yields_one_row() {
        let entries = flatten(&EvolutionNode::leaf(species("tauros", 128)));
        assert_eq!(rows(&entries), vec![("tauros", 1)]);
    }

    #[test]
    fn urls_point_at_detail_resources() {
        let tree = EvolutionNode::with_children(
            species("bulbasaur", 1),
            vec![EvolutionNode::leaf(species("ivysaur", 2))],
        );
        let entries = flatten(&tree);
        assert!(entries.iter().all(|e| !e.pokemon.url.contains("pokemon-species")));
        assert!(
            entries
                .first()
                .is_some_and(|e| e.pokemon.url == "https://pokeapi.co/api/v2/pokemon/1/")
        );
    }

    #[test]
    fn wide_branching_keeps_sibling_order() {
        // eevee -> [vaporeon, jolteon, flareon]
        let tree = EvolutionNode::with_children(
            species("eevee", 133),
            vec![
                EvolutionNode::leaf(species("vaporeon", 134)),
                EvolutionNode::leaf(species("jolteon", 135)),
                EvolutionNode::leaf(species("flareon", 136)),
            ],
        );
        assert_eq!(
            rows(&flatten(&tree)),
            vec![("eevee", 1), ("vaporeon", 2), ("jolteon", 2), ("flareon", 2)]
        );
    }

    #[test]
    fn repeated_species_are_not_deduplicated() {
        let tree = EvolutionNode::with_children(
            species("root", 1),
            vec![
                EvolutionNode::with_children(
                    species("mid", 2),
                    vec![EvolutionNode::leaf(species("same", 9))],
                ),
                EvolutionNode::leaf(species("same", 9)),
            ],
        );
        let entries = flatten(&tree);
        assert_eq!(entries.len(), 4);
        assert_eq!(rows(&entries), vec![("root", 1), ("mid", 2), ("same", 3), ("same", 2)]);
    }

    #[test]
    fn row_count_matches_node_count_and_levels_match_depth() {
        fn build(depth: u32, breadth: usize) -> EvolutionNode {
            let children = if depth == 1 {
                Vec::new()
            } else {
                (0..breadth).map(|_| build(depth - 1, breadth)).collect()
            };
            EvolutionNode::with_children(species(&format!("d{depth}"), depth), children)
        }

        // Names encode remaining depth: 1 + 3 + 9 + 27 nodes.
        let tree = build(4, 3);
        let entries = flatten(&tree);
        assert_eq!(entries.len(), 40);
        for entry in &entries {
            let remaining: u32 = entry.pokemon.name.trim_start_matches('d').parse().unwrap_or(0);
            assert_eq!(entry.level + remaining, 5);
        }
    }

    #[test]
    fn level_lookup_defaults_when_absent() {
        let entries = flatten(&EvolutionNode::with_children(
            species("pichu", 172),
            vec![EvolutionNode::with_children(
                species("pikachu", 25),
                vec![EvolutionNode::leaf(species("raichu", 26))],
            )],
        ));
        assert_eq!(evolution_level_of(&entries, "pikachu"), 2);
        assert_eq!(evolution_level_of(&entries, "raichu"), 3);
        assert_eq!(evolution_level_of(&entries, "mewtwo"), DEFAULT_EVOLUTION_LEVEL);
        assert_eq!(evolution_level_of(&[], "mewtwo"), 1);
    }
}
