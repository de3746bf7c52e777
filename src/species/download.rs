use super::convert::convert;
use super::model::PokemonSpecies;
use crate::error::Result;
use crate::pokeapi::PokeApi;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Path of a species fixture: `<data_root>/pokemon/<dex>-<name>.json`.
pub fn species_file_path(data_root: &Path, species: &PokemonSpecies) -> PathBuf {
    data_root
        .join("pokemon")
        .join(format!("{}-{}.json", species.national_dex_number, species.name))
}

/// Writes a species document with 4-space indentation, creating directories as needed.
pub async fn write_species_file(data_root: &Path, species: &PokemonSpecies) -> Result<PathBuf> {
    let path = species_file_path(data_root, species);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    species.serialize(&mut serializer)?;

    tokio::fs::write(&path, buf).await?;
    Ok(path)
}

/// Converts and writes the first `limit` species, one at a time.
///
/// Requests are deliberately serialized with `delay` between species to go
/// easy on PokeAPI.
pub async fn download_species<C: PokeApi>(
    client: &C,
    data_root: &Path,
    limit: u32,
    delay: Duration,
) -> Result<Vec<PathBuf>> {
    let names = client.species_names(limit).await?;
    tracing::info!("Downloading {} species into {}", names.len(), data_root.display());

    let mut written = Vec::with_capacity(names.len());
    for (index, species_name) in names.iter().enumerate() {
        tracing::info!("Downloading {}...", species_name);
        let species = convert(client, species_name).await?;
        written.push(write_species_file(data_root, &species).await?);

        if index + 1 < names.len() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    tracing::info!("Done!");
    Ok(written)
}
