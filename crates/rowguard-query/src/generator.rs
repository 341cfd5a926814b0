use rowguard_core::{Column, TableSchema, UUID_DECODE_EXPR};
use tracing::debug;

use crate::statement::StatementKind;

/// SQL templates for one table, rendered once at construction.
///
/// Identifiers are interpolated as-is: the table name unquoted and column
/// names inside backticks. They must come from trusted configuration, never
/// from request input. Values are never interpolated; every statement uses
/// positional `?` placeholders bound in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryGenerator {
    table: String,
    columns: Vec<Column>,
    get: String,
    count: String,
    fetch: String,
    remove: String,
    insert: String,
}

impl QueryGenerator {
    pub fn new(columns: &[Column], table: &str) -> Self {
        let names = columns
            .iter()
            .map(|column| format!("`{}`", column.name))
            .collect::<Vec<_>>()
            .join(", ");
        let values = columns
            .iter()
            .map(|column| column.column_type.value_expression())
            .collect::<Vec<_>>()
            .join(", ");

        let generator = Self {
            table: table.to_string(),
            columns: columns.to_vec(),
            get: format!("SELECT {names} FROM {table} WHERE uuid = {UUID_DECODE_EXPR}"),
            count: format!("SELECT COUNT(uuid) AS total FROM {table}"),
            fetch: format!("SELECT {names} FROM {table} ORDER BY created DESC LIMIT ? OFFSET ?"),
            remove: format!("DELETE FROM {table} WHERE uuid = {UUID_DECODE_EXPR}"),
            insert: format!("INSERT INTO {table} ({names}) VALUES ({values})"),
        };

        debug!(table = %table, columns = columns.len(), "query generator built");
        generator
    }

    pub fn from_schema(schema: &TableSchema) -> Self {
        Self::new(&schema.columns, &schema.table)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// `SELECT <cols> FROM <table> WHERE uuid = <decode>`; binds the UUID key.
    pub fn get_statement(&self) -> &str {
        &self.get
    }

    /// `SELECT COUNT(uuid) AS total FROM <table>`; binds nothing.
    pub fn count_statement(&self) -> &str {
        &self.count
    }

    /// `SELECT <cols> FROM <table> ORDER BY created DESC LIMIT ? OFFSET ?`; binds limit then offset.
    pub fn fetch_statement(&self) -> &str {
        &self.fetch
    }

    /// `DELETE FROM <table> WHERE uuid = <decode>`; binds the UUID key.
    pub fn remove_statement(&self) -> &str {
        &self.remove
    }

    /// `INSERT INTO <table> (<cols>) VALUES (<exprs>)`; binds one value per column in schema order.
    pub fn insert_statement(&self) -> &str {
        &self.insert
    }

    pub fn statement(&self, kind: StatementKind) -> &str {
        match kind {
            StatementKind::Get => self.get_statement(),
            StatementKind::Count => self.count_statement(),
            StatementKind::Fetch => self.fetch_statement(),
            StatementKind::Remove => self.remove_statement(),
            StatementKind::Insert => self.insert_statement(),
        }
    }

    /// Number of positional parameters the statement expects.
    pub fn parameter_count(&self, kind: StatementKind) -> usize {
        match kind {
            StatementKind::Get | StatementKind::Remove => 1,
            StatementKind::Count => 0,
            StatementKind::Fetch => 2,
            StatementKind::Insert => self.columns.len(),
        }
    }
}
