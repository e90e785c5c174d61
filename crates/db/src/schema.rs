//! Table descriptors and the explicit schema registry.
//!
//! Every persisted row struct implements [`Entity`] and carries a static
//! [`TableSchema`].  Callers collect the entities they need into a
//! [`SchemaRegistry`] and hand it to [`crate::pool::init_schema`], which turns
//! the descriptors into `CREATE TABLE` / `CREATE INDEX` statements.

use crate::{models::TransactionRow, DbError};

// ---------------------------------------------------------------------------
// Column descriptors
// ---------------------------------------------------------------------------

/// SQLite storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    Real,
}

impl ColumnType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
            Self::Real => "REAL",
        }
    }
}

/// A single column declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    /// Storage-assigned, unique row identifier.
    pub primary_key: bool,
    /// Gets its own `ix_<table>_<column>` index.
    pub indexed: bool,
    pub nullable: bool,
}

// ---------------------------------------------------------------------------
// Table descriptors
// ---------------------------------------------------------------------------

/// The declared shape of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    ///
    /// The primary key is declared `INTEGER PRIMARY KEY AUTOINCREMENT` so
    /// SQLite assigns it and never hands out the id of a deleted row again.
    pub fn create_table_sql(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|col| {
                if col.primary_key {
                    format!("{} {} PRIMARY KEY AUTOINCREMENT", col.name, col.ty.as_sql())
                } else if col.nullable {
                    format!("{} {}", col.name, col.ty.as_sql())
                } else {
                    format!("{} {} NOT NULL", col.name, col.ty.as_sql())
                }
            })
            .collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", ")
        )
    }

    /// One `CREATE INDEX IF NOT EXISTS` statement per indexed column.
    pub fn create_index_sql(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|col| col.indexed)
            .map(|col| {
                format!(
                    "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                    self.index_name(col.name),
                    self.name,
                    col.name
                )
            })
            .collect()
    }

    /// Name of the index created for `column`.
    pub fn index_name(&self, column: &str) -> String {
        format!("ix_{}_{}", self.name, column)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|col| col.name).collect()
    }
}

/// A row struct that maps onto a declared table.
pub trait Entity {
    const SCHEMA: TableSchema;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Explicit, caller-built list of the tables a database should contain.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: Vec<TableSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `E`'s table to the registry.
    ///
    /// Returns `DbError::DuplicateTable` if a table with the same name is
    /// already registered.
    pub fn register<E: Entity>(&mut self) -> Result<&mut Self, DbError> {
        let schema = E::SCHEMA;
        if self.tables.iter().any(|t| t.name == schema.name) {
            return Err(DbError::DuplicateTable(schema.name.to_string()));
        }
        self.tables.push(schema);
        Ok(self)
    }

    /// Registered tables, in registration order.
    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Registry holding every entity persisted by this workspace.
pub fn default_registry() -> Result<SchemaRegistry, DbError> {
    let mut registry = SchemaRegistry::new();
    registry.register::<TransactionRow>()?;
    Ok(registry)
}
