#![allow(dead_code)]

use pokedex_pipeline::pokeapi::PokeApi;
use pokedex_pipeline::{PipelineError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use tokio::time::Instant;

const API_ROOT: &str = "https://pokeapi.co/api/v2/";

/// Serves PokeAPI resources from memory, keyed like `version/red`.
#[derive(Default)]
pub struct FixtureClient {
    resources: HashMap<String, Value>,
    requests: RefCell<Vec<(String, Instant)>>,
}

fn normalize(path: &str) -> String {
    path.trim_start_matches(API_ROOT)
        .trim_matches('/')
        .to_string()
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `<kind>/<name>.json` under `root`.
    pub fn from_dir(root: &Path) -> Self {
        let mut client = Self::new();
        for kind in std::fs::read_dir(root).unwrap() {
            let kind = kind.unwrap().path();
            let kind_name = kind.file_name().unwrap().to_string_lossy().to_string();
            for file in std::fs::read_dir(&kind).unwrap() {
                let file = file.unwrap().path();
                let name = file.file_stem().unwrap().to_string_lossy().to_string();
                let body = std::fs::read_to_string(&file).unwrap();
                client.insert(&format!("{kind_name}/{name}"), serde_json::from_str(&body).unwrap());
            }
        }
        client
    }

    pub fn kanto() -> Self {
        Self::from_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pokeapi"))
    }

    pub fn insert(&mut self, path: &str, value: Value) {
        self.resources.insert(normalize(path), value);
    }

    pub fn with(mut self, path: &str, value: Value) -> Self {
        self.insert(path, value);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Every request with the (possibly paused) tokio clock reading it was made at.
    pub fn timeline(&self) -> Vec<(String, Instant)> {
        self.requests.borrow().clone()
    }
}

impl PokeApi for FixtureClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let key = normalize(path);
        self.requests.borrow_mut().push((key.clone(), Instant::now()));

        let value = self
            .resources
            .get(&key)
            .cloned()
            .ok_or_else(|| PipelineError::NotFound(key))?;
        Ok(serde_json::from_value(value)?)
    }
}

pub fn resource(name: &str) -> Value {
    json!({ "name": name, "url": "" })
}

/// A `/pokemon/{name}` record with fixed stats.
pub fn variety(name: &str, is_default: bool, sprite: bool, types: &[&str]) -> Value {
    let sprite = sprite.then(|| format!("https://sprites.invalid/{name}.png"));
    let stats = [
        ("hp", 80),
        ("attack", 90),
        ("defense", 70),
        ("special-attack", 100),
        ("special-defense", 75),
        ("speed", 95),
    ]
    .iter()
    .map(|(stat, base)| json!({ "base_stat": base, "effort": 0, "stat": resource(stat) }))
    .collect::<Vec<_>>();
    let types = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": resource(t) }))
        .collect::<Vec<_>>();

    json!({
        "id": 1,
        "name": name,
        "is_default": is_default,
        "sprites": { "front_default": sprite },
        "abilities": [{ "is_hidden": false, "slot": 1, "ability": resource("blaze") }],
        "moves": [{ "move": resource("scratch") }, { "move": resource("ember") }],
        "stats": stats,
        "types": types,
    })
}

/// A `/pokemon-species/{name}` record.
pub fn species(
    name: &str,
    english: Option<&str>,
    national: Option<u32>,
    chain_id: u32,
    evolves_from: Option<&str>,
    varieties: &[&str],
) -> Value {
    let mut names = vec![json!({ "name": name.to_uppercase(), "language": resource("ja") })];
    if let Some(english) = english {
        names.push(json!({ "name": english, "language": resource("en") }));
    }

    let mut pokedex_numbers = vec![json!({ "entry_number": 999, "pokedex": resource("kalos-central") })];
    if let Some(number) = national {
        pokedex_numbers.push(json!({ "entry_number": number, "pokedex": resource("national") }));
    }

    let varieties = varieties
        .iter()
        .enumerate()
        .map(|(i, v)| json!({ "is_default": i == 0, "pokemon": resource(v) }))
        .collect::<Vec<_>>();

    json!({
        "name": name,
        "names": names,
        "pokedex_numbers": pokedex_numbers,
        "evolution_chain": { "url": format!("{API_ROOT}evolution-chain/{chain_id}/") },
        "evolves_from_species": evolves_from.map(resource),
        "varieties": varieties,
    })
}

/// A linear evolution chain over `line`.
pub fn linear_chain(id: u32, line: &[&str]) -> Value {
    let mut link = Value::Null;
    for name in line.iter().rev() {
        let evolves_to = if link.is_null() { vec![] } else { vec![link] };
        link = json!({ "species": resource(name), "evolves_to": evolves_to });
    }
    json!({ "id": id, "chain": link })
}
