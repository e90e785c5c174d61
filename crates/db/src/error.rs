//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,

    /// Two entities were registered under the same table name.
    #[error("table '{0}' is already registered")]
    DuplicateTable(String),
}
