//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no behaviour beyond their
//! schema declaration.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::{ColumnDef, ColumnType, Entity, TableSchema};

// ---------------------------------------------------------------------------
// transactions
// ---------------------------------------------------------------------------

/// A persisted transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransactionRow {
    /// Assigned by SQLite on insert, never reused.
    pub id: i64,
    pub description: String,
    pub amount: f64,
}

impl Entity for TransactionRow {
    const SCHEMA: TableSchema = TableSchema {
        name: "transactions",
        columns: &[
            ColumnDef {
                name: "id",
                ty: ColumnType::Integer,
                primary_key: true,
                indexed: true,
                nullable: false,
            },
            ColumnDef {
                name: "description",
                ty: ColumnType::Text,
                primary_key: false,
                indexed: true,
                nullable: false,
            },
            ColumnDef {
                name: "amount",
                ty: ColumnType::Real,
                primary_key: false,
                indexed: false,
                nullable: false,
            },
        ],
    };
}

/// Caller-supplied fields of a transaction, used for both insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
}

impl NewTransaction {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}
