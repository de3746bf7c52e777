use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Encounter method (`walk`, `old-rod`, `gift`, ...) to the Pokémon found with it.
pub type EncounterSets = IndexMap<String, IndexSet<String>>;

/// Raw location name to its aggregated encounters.
pub type GameLocations = IndexMap<String, GameLocation>;

/// A location while encounters are being collected. Sets keep insertion
/// order and make repeated inserts no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLocation {
    pub name: String,
    pub encounters: EncounterSets,
}

impl GameLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encounters: IndexMap::new(),
        }
    }

    pub fn add_encounter(&mut self, method: &str, pokemon: &str) {
        self.encounters
            .entry(method.to_string())
            .or_default()
            .insert(pokemon.to_string());
    }
}

/// A location as written to the encounters document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonGameLocation {
    pub id: String,
    pub name: String,
    pub encounters: IndexMap<String, Vec<String>>,
}

/// Identity of a game version, e.g. `red` / `Pokémon Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// The encounters document of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonGame {
    pub id: String,
    pub name: String,
    pub locations: Vec<PokemonGameLocation>,
}

/// Converts method sets into arrays, keeping set iteration order.
pub fn encounters_as_map(encounters: &EncounterSets) -> IndexMap<String, Vec<String>> {
    encounters
        .iter()
        .map(|(method, pokemon)| (method.clone(), pokemon.iter().cloned().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_become_arrays_in_insertion_order() {
        let mut location = GameLocation::new("Viridian Forest");
        for pokemon in ["pikachu", "caterpie", "weedle"] {
            location.add_encounter("walk", pokemon);
        }

        let result = encounters_as_map(&location.encounters);
        assert_eq!(result.len(), 1);
        assert_eq!(result["walk"], vec!["pikachu", "caterpie", "weedle"]);
    }

    #[test]
    fn test_empty_map() {
        assert!(encounters_as_map(&EncounterSets::new()).is_empty());
    }

    #[test]
    fn test_empty_set() {
        let mut encounters = EncounterSets::new();
        encounters.insert("grass".to_string(), IndexSet::new());

        let result = encounters_as_map(&encounters);
        assert_eq!(result["grass"], Vec::<String>::new());
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"grass":[]}"#);
    }

    #[test]
    fn test_repeated_inserts_are_idempotent() {
        let mut location = GameLocation::new("Route 1");
        location.add_encounter("walk", "pidgey");
        location.add_encounter("walk", "rattata");
        location.add_encounter("walk", "pidgey");

        assert_eq!(
            encounters_as_map(&location.encounters)["walk"],
            vec!["pidgey", "rattata"]
        );
    }

    #[test]
    fn test_methods_keep_insertion_order() {
        let mut location = GameLocation::new("Mt. Moon");
        location.add_encounter("walk", "zubat");
        location.add_encounter("rock-smash", "geodude");
        location.add_encounter("walk", "geodude");

        let json = serde_json::to_string(&encounters_as_map(&location.encounters)).unwrap();
        assert_eq!(json, r#"{"walk":["zubat","geodude"],"rock-smash":["geodude"]}"#);
    }
}
