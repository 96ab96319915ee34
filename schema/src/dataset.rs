use crate::move_data::MoveData;
use crate::pokemon_types::PokemonType;
use crate::species_data::Pokemon;
use serde::{Deserialize, Serialize};

/// The whole data file: three ordered collections loaded together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub pokemons: Vec<Pokemon>,
    #[serde(default)]
    pub moves: Vec<MoveData>,
}
