use crate::pokemon_types::names_match;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candy {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "FamilyID")]
    pub family_id: i32,
}

/// What it takes to evolve: `amount` candies of the given family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRequirement {
    #[serde(rename = "Amount")]
    pub amount: i32,
    #[serde(rename = "Family")]
    pub family: i32,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStep {
    #[serde(rename = "Number", deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A pokedex entry. Field names follow the upstream data file exactly,
/// including the spaces and parentheses in some keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Classification", default)]
    pub classification: String,
    /// Only the first entry is used; the data file stores it as a list.
    #[serde(rename = "Type I")]
    pub type_i: Vec<String>,
    #[serde(rename = "Type II", default, skip_serializing_if = "Option::is_none")]
    pub type_ii: Option<Vec<String>>,
    #[serde(rename = "Weaknesses", default)]
    pub weaknesses: Vec<String>,
    #[serde(rename = "Fast Attack(s)", default)]
    pub fast_attacks: Vec<String>,
    #[serde(rename = "Weight", default)]
    pub weight: String,
    #[serde(rename = "Height", default)]
    pub height: String,
    #[serde(rename = "Candy", default)]
    pub candy: Candy,
    #[serde(
        rename = "Next Evolution Requirements",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_evolution_requirements: Option<EvolutionRequirement>,
    #[serde(
        rename = "Next evolution(s)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_evolutions: Option<Vec<EvolutionStep>>,
    #[serde(
        rename = "Previous evolution(s)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_evolutions: Option<Vec<EvolutionStep>>,
    #[serde(rename = "Special Attack(s)", default)]
    pub special_attacks: Vec<String>,
    #[serde(rename = "BaseAttack", default)]
    pub base_attack: i32,
    #[serde(rename = "BaseDefense", default)]
    pub base_defense: i32,
    #[serde(rename = "BaseStamina", default)]
    pub base_stamina: i32,
    #[serde(rename = "CaptureRate", default)]
    pub capture_rate: f64,
    #[serde(rename = "FleeRate", default)]
    pub flee_rate: f64,
    #[serde(rename = "BuddyDistanceNeeded", default)]
    pub buddy_distance_needed: i32,
}

/// Some exports write evolution numbers as bare integers ("Number": 3)
/// rather than zero-padded strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(number) => format!("{:03}", number),
    })
}

impl Pokemon {
    /// The canonical type used for every type-based filter.
    pub fn primary_type(&self) -> &str {
        self.type_i.first().map(String::as_str).unwrap_or("")
    }

    pub fn secondary_type(&self) -> Option<&str> {
        self.type_ii
            .as_ref()
            .and_then(|types| types.first())
            .map(String::as_str)
    }

    pub fn has_primary_type(&self, type_name: &str) -> bool {
        names_match(self.primary_type(), type_name)
    }

    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Next evolutions, treating an absent record like an empty one.
    pub fn next_evolutions(&self) -> &[EvolutionStep] {
        self.next_evolutions.as_deref().unwrap_or_default()
    }

    pub fn previous_evolutions(&self) -> &[EvolutionStep] {
        self.previous_evolutions.as_deref().unwrap_or_default()
    }
}
