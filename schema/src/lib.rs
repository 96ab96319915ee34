// Pokedex Schema - Shared data definitions
// This crate holds the serde model of the pokedex data file and the small
// enums used to address it (collections, operations, sort keys), so that the
// query engine and every front end agree on one vocabulary.

pub use dataset::*;
pub use move_data::*;
pub use pokemon_types::*;
pub use query_keys::*;
pub use species_data::*;

pub mod dataset;
pub mod move_data;
pub mod pokemon_types;
pub mod query_keys;
pub mod species_data;
