use crate::cache::CacheError;
use thiserror::Error;

/// Errors raised while fetching, normalizing or writing Pokémon data.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No english name found")]
    NoEnglishName,

    #[error("Unable to find location: {0}")]
    LocationNotFound(String),

    #[error("Missing entries for {0}")]
    MissingMergeSource(String),

    #[error("Missing base stat: {0}")]
    MissingStat(String),

    #[error("Unknown Pokémon type: {0}")]
    UnknownType(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        PipelineError::Network(err.to_string())
    }
}

impl From<toml::de::Error> for PipelineError {
    fn from(err: toml::de::Error) -> Self {
        PipelineError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
