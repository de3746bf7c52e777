//! Species conversion: PokeAPI species and varieties into forms and modes.

mod classify;
mod convert;
mod download;
mod evolution;
mod model;

pub use classify::{is_likely_mode, is_mode_of};
pub use convert::convert;
pub use download::{download_species, species_file_path, write_species_file};
pub use evolution::evolution_targets;
pub use model::*;
