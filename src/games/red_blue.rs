use crate::encounters::{
    EncounterSets, GameLocations, LocationTransformer, MethodClaims, PokemonGameLocation,
    encounters_as_map,
};
use crate::error::PipelineError;
use indexmap::IndexMap;

pub const RED_BLUE_LOCATION_ORDER: &[&str] = &[
    "starter",
    "pallet-town",
    "kanto-route-1",
    "viridian-city",
    "kanto-route-22",
    "kanto-route-2",
    "viridian-forest",
    "kanto-route-3",
    "kanto-route-4",
    "mt-moon",
    "cerulean-city",
    "kanto-route-24",
    "kanto-route-25",
    "kanto-route-5",
    "kanto-route-6",
    "vermilion-city",
    "kanto-route-11",
    "digletts-cave",
    "kanto-route-9",
    "kanto-route-10",
    "rock-tunnel",
    "pokemon-tower",
    "kanto-route-12",
    "kanto-route-8",
    "kanto-route-7",
    "celadon-city",
    "saffron-city",
    "kanto-route-16",
    "kanto-route-17",
    "kanto-route-18",
    "fuchsia-city",
    "kanto-safari-zone",
    "kanto-route-15",
    "kanto-route-14",
    "kanto-route-13",
    "power-plant",
    "kanto-sea-route-19",
    "kanto-sea-route-20",
    "seafoam-islands",
    "cinnabar-island",
    "pokemon-mansion",
    "kanto-sea-route-21",
    "kanto-route-23",
    "kanto-victory-road",
    "cerulean-cave",
];

/// Red/Blue overrides.
///
/// The starters are gifts in Pallet Town upstream; they get their own
/// `starter` location and are removed from Pallet Town. PokeAPI splits Victory
/// Road into two locations, which are merged back into one.
pub fn red_blue_transformers(game_locations: &GameLocations) -> LocationTransformer<'_> {
    let claims = MethodClaims::new().consume("pallet-town", "gift");

    LocationTransformer::new()
        .with_claims(claims.clone())
        .with("starter", move || {
            let gifts: Vec<String> = game_locations
                .get("pallet-town")
                .and_then(|l| l.encounters.get("gift"))
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default();

            Ok(PokemonGameLocation {
                id: "starter".to_string(),
                name: "Starter".to_string(),
                encounters: IndexMap::from([("gift".to_string(), gifts)]),
            })
        })
        .with("pallet-town", move || {
            let location = game_locations
                .get("pallet-town")
                .ok_or_else(|| PipelineError::LocationNotFound("pallet-town".to_string()))?;

            Ok(PokemonGameLocation {
                id: "pallet-town".to_string(),
                name: "Pallet Town".to_string(),
                encounters: claims.strip("pallet-town", &location.encounters),
            })
        })
        .with("kanto-victory-road", move || {
            let (Some(first), Some(second)) = (
                game_locations.get("kanto-victory-road-1"),
                game_locations.get("kanto-victory-road-2"),
            ) else {
                return Err(PipelineError::MissingMergeSource(
                    "Kanto Victory Road".to_string(),
                ));
            };

            // Key-level merge: a method listed on both floors takes the second
            // floor's encounters but keeps its first-seen position.
            let mut merged = EncounterSets::new();
            for (method, pokemon) in first.encounters.iter().chain(&second.encounters) {
                merged.insert(method.clone(), pokemon.clone());
            }

            Ok(PokemonGameLocation {
                id: "kanto-victory-road".to_string(),
                name: "Kanto Victory Road".to_string(),
                encounters: encounters_as_map(&merged),
            })
        })
}
