use crate::pokeapi::{ChainLink, EvolutionChain};

/// Direct evolutions of `target_species` within an evolution chain.
///
/// Names are compared case-insensitively. Only immediate children are returned,
/// and an empty list means the species was not found or does not evolve.
pub fn evolution_targets(chain: &EvolutionChain, target_species: &str) -> Vec<String> {
    search(&chain.chain, &target_species.to_lowercase())
}

fn search(node: &ChainLink, target: &str) -> Vec<String> {
    if node.species.name.to_lowercase() == target {
        return node
            .evolves_to
            .iter()
            .map(|child| child.species.name.clone())
            .collect();
    }

    node.evolves_to
        .iter()
        .map(|child| search(child, target))
        .find(|targets| !targets.is_empty())
        .unwrap_or_default()
}
