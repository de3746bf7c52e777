use super::model::{EncounterSets, GameLocations, PokemonGameLocation, encounters_as_map};
use crate::error::Result;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Produces the final form of one location; may read the aggregated locations.
pub type TransformFn<'a> = Box<dyn Fn() -> Result<PokemonGameLocation> + 'a>;

/// Encounter methods of raw locations that another transformer entry re-homes.
///
/// The starter pseudo-location takes Pallet Town's `gift` encounters, so
/// Pallet Town itself must not list them. Declaring that here keeps both sides
/// of the coupling in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodClaims(Vec<(String, String)>);

impl MethodClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `method` encounters of raw location `location` are consumed elsewhere.
    pub fn consume(mut self, location: &str, method: &str) -> Self {
        self.0.push((location.to_string(), method.to_string()));
        self
    }

    pub fn methods_of<'s>(&'s self, location: &'s str) -> impl Iterator<Item = &'s str> {
        self.0
            .iter()
            .filter(move |(claimed, _)| claimed == location)
            .map(|(_, method)| method.as_str())
    }

    /// Default array conversion of `encounters`, minus the methods consumed elsewhere.
    pub fn strip(
        &self,
        location: &str,
        encounters: &EncounterSets,
    ) -> IndexMap<String, Vec<String>> {
        let mut converted = encounters_as_map(encounters);
        for method in self.methods_of(location) {
            converted.shift_remove(method);
        }
        converted
    }
}

/// Per-game overrides of the default location conversion.
///
/// Locations without an entry fall through to the default conversion, which
/// also honours the table's [`MethodClaims`].
#[derive(Default)]
pub struct LocationTransformer<'a> {
    handlers: HashMap<String, TransformFn<'a>>,
    claims: MethodClaims,
}

impl<'a> LocationTransformer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the producer for location `id`, replacing any previous one.
    pub fn with<F>(mut self, id: &str, transform: F) -> Self
    where
        F: Fn() -> Result<PokemonGameLocation> + 'a,
    {
        self.handlers.insert(id.to_string(), Box::new(transform));
        self
    }

    pub fn with_claims(mut self, claims: MethodClaims) -> Self {
        self.claims = claims;
        self
    }

    pub fn claims(&self) -> &MethodClaims {
        &self.claims
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the entry for `id`, if there is one.
    pub fn apply(&self, id: &str) -> Option<Result<PokemonGameLocation>> {
        self.handlers.get(id).map(|transform| {
            tracing::debug!("Applying location transformer for {}", id);
            transform()
        })
    }
}

/// Builds the transformer table of a game from its aggregated locations.
pub type TransformerFactory = for<'a> fn(&'a GameLocations) -> LocationTransformer<'a>;

/// Factory for games without overrides.
pub fn no_transformers(_: &GameLocations) -> LocationTransformer<'_> {
    LocationTransformer::new()
}
