use super::classify::{is_likely_mode, is_mode_of};
use super::evolution::evolution_targets;
use super::model::{PokemonForm, PokemonMode, PokemonSpecies, PokemonType};
use crate::error::Result;
use crate::extract::{base_stats, english_name_or, national_dex_number};
use crate::pokeapi::{EvolutionChain, PokeApi, Pokemon};

/// A variety that has a sprite, paired with it.
struct Variety {
    record: Pokemon,
    sprite: String,
}

impl Variety {
    fn to_mode(&self) -> Result<PokemonMode> {
        let types = self
            .record
            .types
            .iter()
            .map(|t| t.r#type.name.parse::<PokemonType>())
            .collect::<Result<Vec<_>>>()?;

        Ok(PokemonMode {
            mode_name: self.record.name.clone(),
            is_default: self.record.is_default,
            sprite: self.sprite.clone(),
            types,
            base_stats: base_stats(&self.record.stats)?,
            abilities: self
                .record
                .abilities
                .iter()
                .map(|a| a.ability.name.clone())
                .collect(),
        })
    }
}

/// Fetches one species and converts it into its forms and modes.
///
/// Varieties are fetched one after another. Varieties without a default front
/// sprite are most likely unobtainable and are dropped.
pub async fn convert<C: PokeApi>(client: &C, species_name: &str) -> Result<PokemonSpecies> {
    let species = client.species(species_name).await?;
    let chain: EvolutionChain = client.resource(&species.evolution_chain.url).await?;

    let name = english_name_or(&species.names, species_name).to_string();
    let national_dex_number = national_dex_number(&species.pokedex_numbers);

    let mut base_varieties = Vec::new();
    let mut mode_varieties = Vec::new();
    for entry in &species.varieties {
        let record = client.pokemon(&entry.pokemon.name).await?;

        let Some(sprite) = record.sprites.front_default.clone() else {
            tracing::warn!("Skipping {} due to lack of sprite", record.name);
            continue;
        };

        let variety = Variety { record, sprite };
        if is_likely_mode(&variety.record.name) {
            mode_varieties.push(variety);
        } else {
            base_varieties.push(variety);
        }
    }

    let evolves_into = evolution_targets(&chain, &species.name);
    let evolves_from = species
        .evolves_from_species
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_default();

    let forms = base_varieties
        .iter()
        .map(|base| {
            let mut modes = vec![base.to_mode()?];
            for mode in mode_varieties
                .iter()
                .filter(|mode| is_mode_of(&base.record.name, &mode.record.name))
            {
                modes.push(mode.to_mode()?);
            }

            Ok(PokemonForm {
                form_name: base.record.name.clone(),
                move_pool: base
                    .record
                    .moves
                    .iter()
                    .map(|m| m.r#move.name.clone())
                    .collect(),
                evolves_into: evolves_into.clone(),
                evolves_from: evolves_from.clone(),
                modes,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Converted {} (#{}) into {} form(s)",
        name,
        national_dex_number,
        forms.len()
    );

    Ok(PokemonSpecies {
        national_dex_number,
        name,
        forms,
    })
}
