use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the type taxonomy, e.g. "Fire".
///
/// Type names referenced in `effective_against` / `weak_against` are expected
/// to exist in the taxonomy but this is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
    /// Types this type deals double damage to.
    #[serde(rename = "effectiveAgainst", default)]
    pub effective_against: Vec<String>,
    /// Types this type deals half damage to.
    #[serde(rename = "weakAgainst", default)]
    pub weak_against: Vec<String>,
}

impl PokemonType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effective_against: Vec::new(),
            weak_against: Vec::new(),
        }
    }

    /// Case-insensitive name comparison. No trimming is applied.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Lowercases both sides before comparing. This is the only normalization
/// used for names and categories anywhere in the dataset.
pub fn names_match(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}
