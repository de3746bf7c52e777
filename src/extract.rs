//! Pure extractors over raw PokeAPI records.

use crate::error::{PipelineError, Result};
use crate::pokeapi::{Name, PokedexNumber, PokemonStat};
use crate::species::Stats;

const ENGLISH: &str = "en";
const NATIONAL_DEX: &str = "national";

/// Returns the English entry of a localized name list.
///
/// Locations must always carry an English name, so a missing one is an error.
pub fn english_name(names: &[Name]) -> Result<&str> {
    names
        .iter()
        .find(|n| n.language.name == ENGLISH)
        .map(|n| n.name.as_str())
        .ok_or(PipelineError::NoEnglishName)
}

/// Like [`english_name`], but falls back to `fallback` instead of failing.
pub fn english_name_or<'a>(names: &'a [Name], fallback: &'a str) -> &'a str {
    english_name(names).unwrap_or(fallback)
}

/// National dex number of a species, or 0 when the species has none.
pub fn national_dex_number(numbers: &[PokedexNumber]) -> u32 {
    numbers
        .iter()
        .find(|n| n.pokedex.name == NATIONAL_DEX)
        .map(|n| n.entry_number)
        .unwrap_or(0)
}

pub fn base_stats(stats: &[PokemonStat]) -> Result<Stats> {
    let stat = |name: &str| {
        stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
            .ok_or_else(|| PipelineError::MissingStat(name.to_string()))
    };

    Ok(Stats {
        hp: stat("hp")?,
        attack: stat("attack")?,
        defense: stat("defense")?,
        special_attack: stat("special-attack")?,
        special_defense: stat("special-defense")?,
        speed: stat("speed")?,
    })
}
