//! The dataset store.
//!
//! A [`Pokedex`] owns the three collections read from the data file. After
//! loading, the only mutation it allows is a whole-collection reorder (see
//! [`crate::sorting`]); every other component borrows from it.

use crate::errors::{DatasetError, DatasetResult};
use schema::{Dataset, MoveData, Pokemon, PokemonType};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pokedex {
    data: Dataset,
}

impl Pokedex {
    /// Load the data file at `path`.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pokedex = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            types = pokedex.types().len(),
            pokemon = pokedex.pokemon().len(),
            moves = pokedex.moves().len(),
            "loaded pokedex data"
        );
        Ok(pokedex)
    }

    pub fn from_json_str(raw: &str) -> DatasetResult<Self> {
        let data: Dataset = serde_json::from_str(raw)?;
        Self::from_dataset(data)
    }

    /// Wrap an already-built dataset, checking that every pokemon has a
    /// primary type.
    pub fn from_dataset(data: Dataset) -> DatasetResult<Self> {
        if let Some((index, pokemon)) = data
            .pokemons
            .iter()
            .enumerate()
            .find(|(_, pokemon)| pokemon.primary_type().is_empty())
        {
            return Err(DatasetError::MissingPrimaryType {
                index,
                name: pokemon.name.clone(),
            });
        }
        Ok(Self { data })
    }

    pub fn types(&self) -> &[PokemonType] {
        &self.data.types
    }

    pub fn pokemon(&self) -> &[Pokemon] {
        &self.data.pokemons
    }

    pub fn moves(&self) -> &[MoveData] {
        &self.data.moves
    }

    #[cfg(test)]
    pub(crate) fn dataset(&self) -> &Dataset {
        &self.data
    }

    pub(crate) fn pokemon_mut(&mut self) -> &mut [Pokemon] {
        &mut self.data.pokemons
    }

    pub(crate) fn moves_mut(&mut self) -> &mut [MoveData] {
        &mut self.data.moves
    }
}
