use schema::{Collection, Operation};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the data file. Any of these is fatal at
/// startup; nothing can be served without the data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// Every pokemon needs a first type; type filtering depends on it
    #[error("pokemon #{index} ({name:?}) has no primary type")]
    MissingPrimaryType { index: usize, name: String },
}

/// Request-level failures. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The category filter names no known type
    #[error("Is that a valid type ? ({0:?})")]
    InvalidType(String),
    /// A name lookup matched nothing
    #[error("No entry named {0:?}")]
    NotFound(String),
    /// The collection has no such operation
    #[error("Oops, there is no such a thing :( ({operation} on {collection})")]
    Unsupported {
        collection: Collection,
        operation: Operation,
    },
}

/// Type alias for Results using DatasetError
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Type alias for Results using QueryError
pub type QueryResult<T> = Result<T, QueryError>;
