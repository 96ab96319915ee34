//! Lookups and filters over the current collection order.
//!
//! Every comparison is a case-insensitive exact match. Results borrow from the
//! [`Pokedex`] and keep its current relative order.

use crate::dataset::Pokedex;
use crate::errors::{QueryError, QueryResult};
use schema::{MoveData, Pokemon, PokemonType};

/// How many pokemon a type report lists as examples
pub const EXAMPLE_POKEMON_LIMIT: usize = 3;

impl Pokedex {
    pub fn list_types(&self) -> Vec<&PokemonType> {
        self.types().iter().collect()
    }

    /// All pokemon, or only those whose primary type matches `type_filter`.
    pub fn list_pokemon(&self, type_filter: Option<&str>) -> QueryResult<Vec<&Pokemon>> {
        match type_filter {
            None => Ok(self.pokemon().iter().collect()),
            Some(type_name) => {
                self.validate_type(type_name)?;
                Ok(self.pokemon_of_type(type_name))
            }
        }
    }

    pub fn list_moves(&self) -> Vec<&MoveData> {
        self.moves().iter().collect()
    }

    /// First pokemon with this name in current order
    pub fn get_pokemon_by_name(&self, name: &str) -> QueryResult<&Pokemon> {
        self.pokemon()
            .iter()
            .find(|pokemon| pokemon.is_named(name))
            .ok_or_else(|| QueryError::NotFound(name.to_string()))
    }

    pub fn get_move_by_name(&self, name: &str) -> QueryResult<&MoveData> {
        self.moves()
            .iter()
            .find(|move_data| move_data.is_named(name))
            .ok_or_else(|| QueryError::NotFound(name.to_string()))
    }

    pub fn get_moves_by_type(&self, type_name: &str) -> QueryResult<Vec<&MoveData>> {
        self.validate_type(type_name)?;
        Ok(self
            .moves()
            .iter()
            .filter(|move_data| move_data.is_of_type(type_name))
            .collect())
    }

    pub fn get_type_by_name(&self, name: &str) -> QueryResult<&PokemonType> {
        self.types()
            .iter()
            .find(|pokemon_type| pokemon_type.is_named(name))
            .ok_or_else(|| QueryError::InvalidType(name.to_string()))
    }

    /// Up to [`EXAMPLE_POKEMON_LIMIT`] pokemon whose primary type is `type_name`.
    pub fn example_pokemon(&self, type_name: &str) -> Vec<&Pokemon> {
        self.pokemon_of_type(type_name)
            .into_iter()
            .take(EXAMPLE_POKEMON_LIMIT)
            .collect()
    }

    fn pokemon_of_type(&self, type_name: &str) -> Vec<&Pokemon> {
        self.pokemon()
            .iter()
            .filter(|pokemon| pokemon.has_primary_type(type_name))
            .collect()
    }
}
