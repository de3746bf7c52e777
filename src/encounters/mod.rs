//! Per-game encounter documents: aggregation, location overrides and output.

mod aggregate;
mod assemble;
mod model;
mod transform;

pub use aggregate::encounter_locations_for_game;
pub use assemble::{assemble, encounters_output_dir, write_encounters_file};
pub use model::*;
pub use transform::{
    LocationTransformer, MethodClaims, TransformFn, TransformerFactory, no_transformers,
};
