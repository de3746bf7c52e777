//! Access to PokeAPI resources.
//!
//! [`PokeApi`] has a single required method, [`PokeApi::get`], which resolves a
//! path relative to the API root (`"version/red"`) or an absolute resource URL
//! taken from a previous response. Typed helpers for every resource the pipeline
//! reads are provided on top of it.

mod http;
mod types;

pub use http::HttpClient;
pub use types::*;

use crate::error::Result;
use futures_util::future::try_join_all;
use serde::de::DeserializeOwned;

#[allow(async_fn_in_trait)]
pub trait PokeApi {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T>;

    async fn version(&self, name: &str) -> Result<Version> {
        self.get(&format!("version/{name}")).await
    }

    async fn version_group(&self, name: &str) -> Result<VersionGroup> {
        self.get(&format!("version-group/{name}")).await
    }

    async fn region(&self, name: &str) -> Result<Region> {
        self.get(&format!("region/{name}")).await
    }

    /// Batch lookup; results come back in the order of `names`.
    async fn regions(&self, names: &[String]) -> Result<Vec<Region>> {
        try_join_all(names.iter().map(|name| self.region(name))).await
    }

    async fn location(&self, name: &str) -> Result<Location> {
        self.get(&format!("location/{name}")).await
    }

    async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.get(&format!("location-area/{name}")).await
    }

    async fn species(&self, name: &str) -> Result<PokemonSpecies> {
        self.get(&format!("pokemon-species/{name}")).await
    }

    async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get(&format!("pokemon/{name}")).await
    }

    /// Names of the first `limit` species in national dex order.
    async fn species_names(&self, limit: u32) -> Result<Vec<String>> {
        let list: NamedApiResourceList =
            self.get(&format!("pokemon-species?limit={limit}")).await?;
        Ok(list.results.into_iter().map(|r| r.name).collect())
    }

    /// Fetches a resource by the absolute URL embedded in another record.
    async fn resource<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.get(url).await
    }
}
