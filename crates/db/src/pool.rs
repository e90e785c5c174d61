//! SQLite connection pool and schema initialization.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::{schema::SchemaRegistry, DbError};

/// Type alias for the shared SQLite pool used across the whole application.
pub type DbPool = SqlitePool;

/// Create a new connection pool from the given `database_url`.
///
/// The database file is created if it does not exist yet.
/// `max_connections` controls the pool ceiling.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!("Connecting to database (max_connections={})", max_connections);
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create a pool backed by a private in-memory database.
///
/// In-memory SQLite data lives and dies with its connection, so the pool is
/// pinned to a single connection that is never reaped.
pub async fn create_memory_pool() -> Result<DbPool, DbError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create every table and index declared in `registry`.
///
/// All statements run inside one transaction and are idempotent.
pub async fn init_schema(pool: &DbPool, registry: &SchemaRegistry) -> Result<(), DbError> {
    info!("Initializing schema ({} tables)", registry.tables().len());
    let mut tx = pool.begin().await?;

    for table in registry.tables() {
        debug!(table = table.name, "creating table");
        sqlx::query(&table.create_table_sql())
            .execute(&mut *tx)
            .await?;

        for stmt in table.create_index_sql() {
            sqlx::query(&stmt).execute(&mut *tx).await?;
        }
    }

    tx.commit().await?;
    Ok(())
}
