//! In-place reordering of the pokemon and move collections.
//!
//! Sorts are always descending and stable, and they persist: every later
//! query sees the new order. Callers that share a [`Pokedex`] between
//! requests must hold exclusive access for the whole sort-then-read sequence
//! (see [`crate::service::QueryService`]).

use crate::dataset::Pokedex;
use ordered_float::OrderedFloat;
use schema::SortKey;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// A sort parameter as received from a caller.
///
/// Unrecognized keys are kept so they can be reported, but they never reorder
/// anything and are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortSelection {
    #[default]
    Unsorted,
    Key(SortKey),
    Unrecognized(String),
}

impl SortSelection {
    /// Interpret an optional raw key. Empty strings mean "no sort".
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => SortSelection::Unsorted,
            Some(raw) => match SortKey::from_str(raw) {
                Ok(key) => SortSelection::Key(key),
                Err(_) => SortSelection::Unrecognized(raw.to_string()),
            },
        }
    }

    pub fn key(&self) -> Option<SortKey> {
        match self {
            SortSelection::Key(key) => Some(*key),
            _ => None,
        }
    }
}

impl fmt::Display for SortSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortSelection::Unsorted => write!(f, "unsorted"),
            SortSelection::Key(key) => write!(f, "{}", key),
            SortSelection::Unrecognized(raw) => write!(f, "{} (ignored)", raw),
        }
    }
}

impl Pokedex {
    /// Reorder the collection `key` targets, highest value first.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::BaseAttack => self.pokemon_mut().sort_by_key(|p| Reverse(p.base_attack)),
            SortKey::BaseDefense => self.pokemon_mut().sort_by_key(|p| Reverse(p.base_defense)),
            SortKey::BaseStamina => self.pokemon_mut().sort_by_key(|p| Reverse(p.base_stamina)),
            SortKey::Damage => self.moves_mut().sort_by_key(|m| Reverse(m.damage)),
            SortKey::Energy => self.moves_mut().sort_by_key(|m| Reverse(m.energy)),
            SortKey::Dps => self.moves_mut().sort_by_key(|m| Reverse(OrderedFloat(m.dps))),
            SortKey::Duration => self.moves_mut().sort_by_key(|m| Reverse(m.duration)),
        }
    }

    /// Apply a caller's sort selection. Returns whether anything was sorted.
    pub fn apply_sort(&mut self, selection: &SortSelection) -> bool {
        match selection {
            SortSelection::Key(key) => {
                tracing::debug!(key = %key, target = %key.target(), "sorting collection");
                self.sort_by(*key);
                true
            }
            SortSelection::Unrecognized(raw) => {
                tracing::debug!(key = %raw, "ignoring unrecognized sort key");
                false
            }
            SortSelection::Unsorted => false,
        }
    }
}
