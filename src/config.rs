use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub pokeapi: PokeApiConfig,
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PokeApiConfig {
    pub api_url: String,
    pub cache_enabled: bool,
    /// Pause between two species downloads, in milliseconds.
    pub request_delay_ms: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CacheConfig {
    pub r#type: String,
    pub max_size: u32,
    pub expiration: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub encounters_root: PathBuf,
    pub data_root: PathBuf,
    pub species_limit: u32,
}

impl Config {
    /// Parses a TOML document into a configuration.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| {
            tracing::error!("Failed to parse configuration: {}", e);
            PipelineError::from(e)
        })
    }

    /// Loads the configuration at `path`, or the embedded default when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let source = std::fs::read_to_string(path).map_err(|e| {
                    PipelineError::Config(format!("unable to read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&source)
            }
            None => Self::from_toml(DEFAULT_CONFIG),
        }
    }
}
