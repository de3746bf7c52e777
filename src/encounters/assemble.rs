use super::aggregate::encounter_locations_for_game;
use super::model::{GameInfo, GameLocations, PokemonGame, PokemonGameLocation};
use super::transform::LocationTransformer;
use crate::error::{PipelineError, Result};
use crate::pokeapi::PokeApi;
use std::path::{Path, PathBuf};

/// Directory holding the encounter documents of `game_id`.
pub fn encounters_output_dir(root: &Path, game_id: &str) -> PathBuf {
    root.join(game_id)
}

/// Builds the encounters document of a game.
///
/// Every id of `location_order` resolves through the transformer table first
/// and the aggregated locations second; an id found in neither fails the whole
/// assembly with [`PipelineError::LocationNotFound`].
pub fn assemble<'a, F>(
    game: &GameInfo,
    location_order: &[&str],
    game_locations: &'a GameLocations,
    transformer: F,
) -> Result<PokemonGame>
where
    F: FnOnce(&'a GameLocations) -> LocationTransformer<'a>,
{
    let handlers = transformer(game_locations);

    let locations = location_order
        .iter()
        .map(|&id| {
            if let Some(transformed) = handlers.apply(id) {
                return transformed;
            }

            let location = game_locations
                .get(id)
                .ok_or_else(|| PipelineError::LocationNotFound(id.to_string()))?;

            Ok(PokemonGameLocation {
                id: id.to_string(),
                name: location.name.clone(),
                encounters: handlers.claims().strip(id, &location.encounters),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PokemonGame {
        id: game.id.to_string(),
        name: game.name.to_string(),
        locations,
    })
}

/// Aggregates, assembles and writes `<root>/<game>/encounters.json`.
pub async fn write_encounters_file<C, F>(
    client: &C,
    root: &Path,
    game: &GameInfo,
    location_order: &[&str],
    transformer: F,
) -> Result<PathBuf>
where
    C: PokeApi,
    F: for<'a> FnOnce(&'a GameLocations) -> LocationTransformer<'a>,
{
    let game_locations = encounter_locations_for_game(client, game.id).await?;
    let game_data = assemble(game, location_order, &game_locations, transformer)?;

    let dir = encounters_output_dir(root, game.id);
    tokio::fs::create_dir_all(&dir).await?;

    let path = dir.join("encounters.json");
    tokio::fs::write(&path, serde_json::to_string_pretty(&game_data)?).await?;
    tracing::info!(
        "Wrote {} locations for {} to {}",
        game_data.locations.len(),
        game.name,
        path.display()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounters::GameLocation;
    use indexmap::IndexMap;

    const RED: GameInfo = GameInfo {
        id: "red",
        name: "Pokémon Red",
    };

    const ORDER: &[&str] = &["viridian-forest", "mt-moon", "cerulean-city"];

    fn game_locations() -> GameLocations {
        let mut locations = GameLocations::new();

        let mut forest = GameLocation::new("Viridian Forest");
        for pokemon in ["pikachu", "caterpie", "weedle"] {
            forest.add_encounter("walk", pokemon);
        }
        locations.insert("viridian-forest".to_string(), forest);

        let mut moon = GameLocation::new("Mt. Moon");
        for pokemon in ["zubat", "geodude", "clefairy"] {
            moon.add_encounter("walk", pokemon);
        }
        moon.add_encounter("rock-smash", "geodude");
        locations.insert("mt-moon".to_string(), moon);

        let mut cerulean = GameLocation::new("Cerulean City");
        cerulean.add_encounter("fishing", "magikarp");
        cerulean.add_encounter("fishing", "poliwag");
        locations.insert("cerulean-city".to_string(), cerulean);

        locations
    }

    fn encounters(entries: Vec<(&str, Vec<&str>)>) -> IndexMap<String, Vec<String>> {
        entries
            .into_iter()
            .map(|(method, pokemon)| {
                (
                    method.to_string(),
                    pokemon.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    fn location(id: &str, name: &str, entries: Vec<(&str, Vec<&str>)>) -> PokemonGameLocation {
        PokemonGameLocation {
            id: id.to_string(),
            name: name.to_string(),
            encounters: encounters(entries),
        }
    }

    #[test]
    fn test_standard_locations() {
        let locations = game_locations();

        let result = assemble(&RED, ORDER, &locations, |_| LocationTransformer::new()).unwrap();

        assert_eq!(
            result,
            PokemonGame {
                id: "red".to_string(),
                name: "Pokémon Red".to_string(),
                locations: vec![
                    location(
                        "viridian-forest",
                        "Viridian Forest",
                        vec![("walk", vec!["pikachu", "caterpie", "weedle"])]
                    ),
                    location(
                        "mt-moon",
                        "Mt. Moon",
                        vec![
                            ("walk", vec!["zubat", "geodude", "clefairy"]),
                            ("rock-smash", vec!["geodude"]),
                        ]
                    ),
                    location(
                        "cerulean-city",
                        "Cerulean City",
                        vec![("fishing", vec!["magikarp", "poliwag"])]
                    ),
                ],
            }
        );
    }

    #[test]
    fn test_custom_transformer_used_verbatim() {
        let locations = game_locations();

        let result = assemble(&RED, ORDER, &locations, |_| {
            LocationTransformer::new().with("mt-moon", || {
                Ok(location(
                    "mt-moon",
                    "Mt. Moon Cave System",
                    vec![
                        ("walk", vec!["zubat", "geodude", "clefairy", "paras"]),
                        ("rock-smash", vec!["geodude", "onix"]),
                    ],
                ))
            })
        })
        .unwrap();

        assert_eq!(
            result.locations[1],
            location(
                "mt-moon",
                "Mt. Moon Cave System",
                vec![
                    ("walk", vec!["zubat", "geodude", "clefairy", "paras"]),
                    ("rock-smash", vec!["geodude", "onix"]),
                ],
            )
        );
    }

    #[test]
    fn test_mixed_locations_do_not_cross_contaminate() {
        let locations = game_locations();
        let plain = assemble(&RED, ORDER, &locations, |_| LocationTransformer::new()).unwrap();

        let mixed = assemble(&RED, ORDER, &locations, |_| {
            LocationTransformer::new().with("cerulean-city", || {
                Ok(location(
                    "cerulean-city",
                    "Cerulean City",
                    vec![
                        ("fishing", vec!["magikarp", "poliwag", "goldeen"]),
                        ("surf", vec!["psyduck", "slowpoke"]),
                    ],
                ))
            })
        })
        .unwrap();

        let ids: Vec<&str> = mixed.locations.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ORDER);
        assert_eq!(mixed.locations[0], plain.locations[0]);
        assert_eq!(mixed.locations[1], plain.locations[1]);
        assert_eq!(
            mixed.locations[2].encounters,
            encounters(vec![
                ("fishing", vec!["magikarp", "poliwag", "goldeen"]),
                ("surf", vec!["psyduck", "slowpoke"]),
            ])
        );
    }

    #[test]
    fn test_transformer_may_introduce_new_ids() {
        let locations = game_locations();
        let order = ["starter", "viridian-forest"];

        let result = assemble(&RED, &order, &locations, |locations| {
            LocationTransformer::new().with("starter", move || {
                let forest = &locations["viridian-forest"];
                Ok(PokemonGameLocation {
                    id: "starter".to_string(),
                    name: "Starter".to_string(),
                    encounters: encounters(vec![(
                        "gift",
                        vec![forest.encounters["walk"][0].as_str()],
                    )]),
                })
            })
        })
        .unwrap();

        assert_eq!(result.locations.len(), 2);
        assert_eq!(result.locations[0].encounters["gift"], vec!["pikachu"]);
    }

    #[test]
    fn test_missing_location_fails() {
        let locations = game_locations();
        let order = ["viridian-forest", "mt-moon", "lavender-town"];

        let err = assemble(&RED, &order, &locations, |_| LocationTransformer::new()).unwrap_err();

        assert!(matches!(err, PipelineError::LocationNotFound(ref id) if id == "lavender-town"));
        assert_eq!(err.to_string(), "Unable to find location: lavender-town");
    }
}
