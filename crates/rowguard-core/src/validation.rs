use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::TableSchema;

/// Validate a table definition before its identifiers are rendered into SQL.
///
/// This checks:
/// - the table name is a plain identifier, optionally qualified as `schema.table`
/// - at least one column is declared
/// - column names are non-empty and safe inside backticks
/// - column names are unique
pub fn validate_table_schema(schema: &TableSchema) -> Result<()> {
    let mut parts = schema.table.split('.');
    let qualified_ok = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, _) => is_identifier(name),
        (Some(namespace), Some(name), None) => is_identifier(namespace) && is_identifier(name),
        _ => false,
    };
    if !qualified_ok {
        return Err(Error::InvalidSchema(format!(
            "invalid table name: {:?}",
            schema.table
        )));
    }

    if schema.columns.is_empty() {
        return Err(Error::InvalidSchema(format!(
            "table has no columns: {}",
            schema.table
        )));
    }

    let mut seen = BTreeSet::new();
    for column in &schema.columns {
        if column.name.is_empty() {
            return Err(Error::InvalidSchema(format!(
                "empty column name in table {}",
                schema.table
            )));
        }

        if column
            .name
            .chars()
            .any(|ch| ch == '`' || ch.is_control())
        {
            return Err(Error::InvalidSchema(format!(
                "column name cannot be quoted safely: {}.{:?}",
                schema.table, column.name
            )));
        }

        if !seen.insert(column.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate column name: {}.{}",
                schema.table, column.name
            )));
        }
    }

    Ok(())
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
