//! The query pipeline shared by every front end.
//!
//! A [`QueryService`] owns the [`Pokedex`] for the life of the process. Each
//! request runs sort, validation, selection and rendering as one unit:
//! requests that carry a sort key take the write lock for the whole unit, all
//! others share the read lock. No request can observe a half-finished reorder,
//! while a completed sort stays in effect for every later request.
//!
//! The sort runs before the type filter is validated. A request with a
//! recognized sort key and an invalid type is rejected, but the reorder it
//! caused persists.

use crate::dataset::Pokedex;
use crate::errors::{QueryError, QueryResult};
use crate::presenter::{render_block, render_move, render_pokemon, render_type};
use crate::sorting::SortSelection;
use schema::{Collection, Operation};
use std::sync::{PoisonError, RwLock};

/// Already-extracted request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub collection: Collection,
    pub operation: Operation,
    pub name: Option<String>,
    pub type_filter: Option<String>,
    pub sort_key: Option<String>,
}

impl QueryRequest {
    pub fn new(collection: Collection, operation: Operation) -> Self {
        Self {
            collection,
            operation,
            name: None,
            type_filter: None,
            sort_key: None,
        }
    }

    pub fn list(collection: Collection) -> Self {
        Self::new(collection, Operation::List)
    }

    pub fn by_name(collection: Collection, name: impl Into<String>) -> Self {
        Self::new(collection, Operation::GetByName).with_name(name)
    }

    pub fn by_type(collection: Collection, type_name: impl Into<String>) -> Self {
        Self::new(collection, Operation::GetByType).with_type_filter(type_name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type_filter(mut self, type_name: impl Into<String>) -> Self {
        self.type_filter = Some(type_name.into());
        self
    }

    pub fn with_sort_key(mut self, sort_key: impl Into<String>) -> Self {
        self.sort_key = Some(sort_key.into());
        self
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    fn type_filter(&self) -> Option<&str> {
        self.type_filter.as_deref()
    }
}

/// Rendered result of one request, one text block per matched entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub blocks: Vec<String>,
    pub sort: SortSelection,
}

impl QueryResponse {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks separated by blank lines
    pub fn to_text(&self) -> String {
        self.blocks.join("\n\n")
    }
}

/// Shared query pipeline. A recognized sort key is applied before the type
/// filter is checked, so a request rejected as an invalid type still leaves
/// its collection reordered.
#[derive(Debug)]
pub struct QueryService {
    pokedex: RwLock<Pokedex>,
}

impl QueryService {
    pub fn new(pokedex: Pokedex) -> Self {
        Self {
            pokedex: RwLock::new(pokedex),
        }
    }

    /// Run the full pipeline for one request.
    pub fn execute(&self, request: &QueryRequest) -> QueryResult<QueryResponse> {
        let sort = SortSelection::parse(request.sort_key.as_deref());
        tracing::debug!(
            collection = %request.collection,
            operation = %request.operation,
            sort = %sort,
            "executing query"
        );

        // The only mutation is a stable permutation, so a poisoned lock
        // still guards valid data.
        let blocks = match &sort {
            SortSelection::Unsorted => {
                let pokedex = self.pokedex.read().unwrap_or_else(PoisonError::into_inner);
                select_and_render(&pokedex, request)?
            }
            SortSelection::Key(_) | SortSelection::Unrecognized(_) => {
                let mut pokedex = self.pokedex.write().unwrap_or_else(PoisonError::into_inner);
                pokedex.apply_sort(&sort);
                select_and_render(&pokedex, request)?
            }
        };

        Ok(QueryResponse { blocks, sort })
    }

    /// Run `f` against the current pokedex under the read lock.
    #[cfg(test)]
    pub(crate) fn with_pokedex<T>(&self, f: impl FnOnce(&Pokedex) -> T) -> T {
        let pokedex = self.pokedex.read().unwrap_or_else(PoisonError::into_inner);
        f(&pokedex)
    }
}

fn select_and_render(pokedex: &Pokedex, request: &QueryRequest) -> QueryResult<Vec<String>> {
    let blocks = match (request.collection, request.operation) {
        (Collection::Types, Operation::List) => pokedex
            .list_types()
            .into_iter()
            .map(|pokemon_type| render_block(&render_type(pokemon_type, pokedex)))
            .collect(),
        (Collection::Types, Operation::GetByName) => {
            let pokemon_type = pokedex.get_type_by_name(request.name())?;
            vec![render_block(&render_type(pokemon_type, pokedex))]
        }
        (Collection::Pokemon, Operation::List) => pokedex
            .list_pokemon(request.type_filter())?
            .into_iter()
            .map(|pokemon| render_block(&render_pokemon(pokemon)))
            .collect(),
        (Collection::Pokemon, Operation::GetByName) => {
            let pokemon = pokedex.get_pokemon_by_name(request.name())?;
            vec![render_block(&render_pokemon(pokemon))]
        }
        (Collection::Pokemon, Operation::GetByType) => pokedex
            .list_pokemon(Some(request.type_filter().unwrap_or("")))?
            .into_iter()
            .map(|pokemon| render_block(&render_pokemon(pokemon)))
            .collect(),
        (Collection::Moves, Operation::List) => pokedex
            .list_moves()
            .into_iter()
            .map(|move_data| render_block(&render_move(move_data)))
            .collect(),
        (Collection::Moves, Operation::GetByName) => {
            let move_data = pokedex.get_move_by_name(request.name())?;
            vec![render_block(&render_move(move_data))]
        }
        (Collection::Moves, Operation::GetByType) => pokedex
            .get_moves_by_type(request.type_filter().unwrap_or(""))?
            .into_iter()
            .map(|move_data| render_block(&render_move(move_data)))
            .collect(),
        (collection @ Collection::Types, operation @ Operation::GetByType) => {
            return Err(QueryError::Unsupported {
                collection,
                operation,
            })
        }
    };
    Ok(blocks)
}
