use crate::dataset::Pokedex;
use crate::errors::{QueryError, QueryResult};

impl Pokedex {
    /// True iff `name` matches a known type name, ignoring case.
    pub fn is_valid_type(&self, name: &str) -> bool {
        self.types().iter().any(|pokemon_type| pokemon_type.is_named(name))
    }

    /// Gate for every category-filtered query
    pub fn validate_type(&self, name: &str) -> QueryResult<()> {
        if self.is_valid_type(name) {
            Ok(())
        } else {
            Err(QueryError::InvalidType(name.to_string()))
        }
    }
}
