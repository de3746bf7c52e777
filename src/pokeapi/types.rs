// types.rs
// Raw PokeAPI records, trimmed to the fields the pipeline reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NamedApiResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedApiResource>,
}

/// A localized name, e.g. `{"name": "Pallet Town", "language": {"name": "en"}}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Name {
    pub name: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Version {
    pub name: String,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VersionGroup {
    pub name: String,
    pub regions: Vec<NamedApiResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Region {
    pub name: String,
    pub locations: Vec<NamedApiResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub areas: Vec<NamedApiResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LocationArea {
    pub name: String,
    pub location: NamedApiResource,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonEncounter {
    pub pokemon: NamedApiResource,
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VersionEncounterDetail {
    pub version: NamedApiResource,
    #[serde(default)]
    pub max_chance: i32,
    pub encounter_details: Vec<Encounter>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Encounter {
    pub method: NamedApiResource,
    #[serde(default)]
    pub min_level: i32,
    #[serde(default)]
    pub max_level: i32,
    #[serde(default)]
    pub chance: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonSpecies {
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokedex_numbers: Vec<PokedexNumber>,
    pub evolution_chain: ApiResource,
    pub evolves_from_species: Option<NamedApiResource>,
    pub varieties: Vec<PokemonSpeciesVariety>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResource {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokedexNumber {
    pub entry_number: u32,
    pub pokedex: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonSpeciesVariety {
    pub is_default: bool,
    pub pokemon: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChainLink {
    pub species: NamedApiResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// One variety of a species, as returned by `/pokemon/{name}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub is_default: bool,
    pub sprites: PokemonSprites,
    pub abilities: Vec<PokemonAbility>,
    pub moves: Vec<PokemonMove>,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonTypeSlot>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonAbility {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: i32,
    pub ability: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonMove {
    pub r#move: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: i32,
    pub stat: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonTypeSlot {
    pub slot: i32,
    pub r#type: NamedApiResource,
}
