// In: src/lib.rs

//! Pokedex query server
//!
//! Loads a pokedex data file (types, pokemon, moves) once and answers lookup,
//! filter and sort queries over it, rendering each match as a nested text
//! report. The HTTP and MCP binaries are thin adapters over
//! [`service::QueryService`].

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod dataset;
pub mod errors;
pub mod http;
pub mod logging;
pub mod mcp_interface;
pub mod presenter;
pub mod query;
pub mod service;
pub mod sorting;
pub mod validation;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    Candy, Collection, Dataset, EvolutionRequirement, EvolutionStep, MoveData, Operation, Pokemon,
    PokemonType, SortKey, SortTarget,
};

// --- From this crate's modules (`src/`) ---
pub use dataset::Pokedex;
pub use errors::{DatasetError, DatasetResult, QueryError, QueryResult};
pub use presenter::{render_block, render_move, render_pokemon, render_type};
pub use service::{QueryRequest, QueryResponse, QueryService};
pub use sorting::SortSelection;
