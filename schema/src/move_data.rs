use crate::pokemon_types::names_match;
use serde::{Deserialize, Serialize};

/// A combat move. `dps` is damage per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub energy: i32,
    #[serde(default)]
    pub dps: f64,
    #[serde(default)]
    pub duration: i32,
}

impl MoveData {
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn is_of_type(&self, type_name: &str) -> bool {
        names_match(&self.move_type, type_name)
    }
}
