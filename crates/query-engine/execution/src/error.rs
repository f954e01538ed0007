//! Errors for query execution.

use thiserror::Error;

/// Query execution error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    DB(#[from] sqlx::Error),
    #[error("unable to decode column '{column}' of type {type_name}: {source}")]
    Decode {
        column: String,
        type_name: String,
        source: sqlx::Error,
    },
}
