//! `db` crate — pure persistence layer.
//!
//! Provides the `transactions` row struct and its schema declaration, an
//! explicit schema registry, a SQLite connection pool, and repository
//! functions for every operation on the table.  No business logic lives here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use models::{NewTransaction, TransactionRow};
pub use pool::DbPool;
pub use schema::{default_registry, Entity, SchemaRegistry};
