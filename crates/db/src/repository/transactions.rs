//! Transaction CRUD operations.

use tracing::debug;

use crate::{
    models::{NewTransaction, TransactionRow},
    DbError, DbPool,
};

/// Insert a new transaction into the database.
///
/// The `id` is assigned by SQLite and returned as part of the row.
pub async fn create_transaction(
    pool: &DbPool,
    new: &NewTransaction,
) -> Result<TransactionRow, DbError> {
    let row = sqlx::query_as::<_, TransactionRow>(
        r#"
        INSERT INTO transactions (description, amount)
        VALUES (?, ?)
        RETURNING id, description, amount
        "#,
    )
    .bind(&new.description)
    .bind(new.amount)
    .fetch_one(pool)
    .await?;

    debug!(id = row.id, "created transaction");
    Ok(row)
}

/// Fetch a single transaction by its primary key.
pub async fn get_transaction(pool: &DbPool, id: i64) -> Result<TransactionRow, DbError> {
    let row = sqlx::query_as::<_, TransactionRow>(
        r#"SELECT id, description, amount FROM transactions WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return all transactions in insertion order.
pub async fn list_transactions(pool: &DbPool) -> Result<Vec<TransactionRow>, DbError> {
    let rows = sqlx::query_as::<_, TransactionRow>(
        r#"SELECT id, description, amount FROM transactions ORDER BY id ASC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return every transaction whose description matches exactly.
pub async fn find_by_description(
    pool: &DbPool,
    description: &str,
) -> Result<Vec<TransactionRow>, DbError> {
    let rows = sqlx::query_as::<_, TransactionRow>(
        r#"
        SELECT id, description, amount
        FROM transactions
        WHERE description = ?
        ORDER BY id ASC
        "#,
    )
    .bind(description)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Overwrite the description and amount of an existing transaction.
///
/// Returns `DbError::NotFound` if no row has the given `id`.
pub async fn update_transaction(
    pool: &DbPool,
    id: i64,
    changes: &NewTransaction,
) -> Result<TransactionRow, DbError> {
    let row = sqlx::query_as::<_, TransactionRow>(
        r#"
        UPDATE transactions
        SET description = ?, amount = ?
        WHERE id = ?
        RETURNING id, description, amount
        "#,
    )
    .bind(&changes.description)
    .bind(changes.amount)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Permanently delete a transaction by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_transaction(pool: &DbPool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    debug!(id, "deleted transaction");
    Ok(())
}
