use strum::{Display, EnumIter, EnumString};

/// Which collection a sort key reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SortTarget {
    #[strum(to_string = "pokemon")]
    Pokemon,
    #[strum(to_string = "moves")]
    Moves,
}

/// Recognized sort keys. Every key sorts its collection in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    BaseAttack,
    BaseDefense,
    BaseStamina,
    Damage,
    Energy,
    Dps,
    Duration,
}

impl SortKey {
    pub fn target(self) -> SortTarget {
        match self {
            SortKey::BaseAttack | SortKey::BaseDefense | SortKey::BaseStamina => SortTarget::Pokemon,
            SortKey::Damage | SortKey::Energy | SortKey::Dps | SortKey::Duration => SortTarget::Moves,
        }
    }
}

/// The collection a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Collection {
    #[strum(to_string = "types")]
    Types,
    #[strum(to_string = "pokemons")]
    Pokemon,
    #[strum(to_string = "moves")]
    Moves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    List,
    GetByName,
    GetByType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_sort_keys_parse_from_lowercase_names() {
        assert_eq!(SortKey::from_str("baseattack"), Ok(SortKey::BaseAttack));
        assert_eq!(SortKey::from_str("BaseDefense"), Ok(SortKey::BaseDefense));
        assert_eq!(SortKey::from_str("DPS"), Ok(SortKey::Dps));
        assert!(SortKey::from_str("speed").is_err());
        assert!(SortKey::from_str("").is_err());
    }

    #[test]
    fn test_sort_key_names_round_trip_through_display() {
        for key in SortKey::iter() {
            assert_eq!(SortKey::from_str(&key.to_string()), Ok(key));
        }
        assert_eq!(SortKey::BaseStamina.to_string(), "basestamina");
    }

    #[test]
    fn test_sort_key_targets() {
        let pokemon_keys: Vec<SortKey> = SortKey::iter()
            .filter(|key| key.target() == SortTarget::Pokemon)
            .collect();
        assert_eq!(
            pokemon_keys,
            vec![SortKey::BaseAttack, SortKey::BaseDefense, SortKey::BaseStamina]
        );
    }

    #[test]
    fn test_collection_and_operation_display_names() {
        assert_eq!(Collection::Pokemon.to_string(), "pokemons");
        assert_eq!(Collection::Types.to_string(), "types");
        assert_eq!(Operation::GetByType.to_string(), "get_by_type");
        assert_eq!(SortTarget::Moves.to_string(), "moves");
    }
}
