use super::model::{GameLocation, GameLocations};
use crate::error::Result;
use crate::extract::english_name;
use crate::pokeapi::{LocationArea, PokeApi};
use futures_util::future::try_join_all;

/// Collects every encounter of `game` (a version name such as `red`), keyed by
/// raw location name.
///
/// Version, version group and regions are fetched in sequence; the locations
/// and then their areas are each fetched as one concurrent batch. Every
/// location must have an English name.
pub async fn encounter_locations_for_game<C: PokeApi>(
    client: &C,
    game: &str,
) -> Result<GameLocations> {
    let version = client.version(game).await?;
    let version_group = client.version_group(&version.version_group.name).await?;

    let region_names: Vec<String> = version_group
        .regions
        .iter()
        .map(|r| r.name.clone())
        .collect();
    let regions = client.regions(&region_names).await?;

    let locations = try_join_all(
        regions
            .iter()
            .flat_map(|r| &r.locations)
            .map(|l| client.location(&l.name)),
    )
    .await?;
    tracing::debug!("Fetched {} locations for {}", locations.len(), game);

    let mut game_locations = GameLocations::with_capacity(locations.len());
    for location in &locations {
        let name = english_name(&location.names).inspect_err(|_| {
            tracing::error!("Location {} has no English name", location.name);
        })?;
        game_locations.insert(location.name.clone(), GameLocation::new(name));
    }

    let areas = try_join_all(
        locations
            .iter()
            .flat_map(|l| &l.areas)
            .map(|a| client.location_area(&a.name)),
    )
    .await?;
    tracing::debug!("Fetched {} location areas for {}", areas.len(), game);

    for area in &areas {
        record_area(&mut game_locations, area, game);
    }

    Ok(game_locations)
}

fn record_area(game_locations: &mut GameLocations, area: &LocationArea, game: &str) {
    let Some(location) = game_locations.get_mut(&area.location.name) else {
        tracing::debug!(
            "Skipping area {}: location {} is not part of this game",
            area.name,
            area.location.name
        );
        return;
    };

    for encounter in &area.pokemon_encounters {
        // An area lists encounters for every version that shares it.
        let Some(details) = encounter
            .version_details
            .iter()
            .find(|v| v.version.name == game)
        else {
            continue;
        };

        for detail in &details.encounter_details {
            location.add_encounter(&detail.method.name, &encounter.pokemon.name);
        }
    }
}
