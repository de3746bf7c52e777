pub mod cache;
pub mod config;
pub mod encounters;
pub mod error;
pub mod extract;
pub mod games;
pub mod pokeapi;
pub mod species;

pub use cache::*;
pub use config::*;
pub use error::{PipelineError, Result};
