use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ColumnType;

/// A single persisted column.
///
/// `name` is rendered verbatim inside backticks, so it must come from trusted
/// configuration. Run [`crate::validate_table_schema`] on anything loaded from
/// disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether input rows may omit this field.
    #[serde(default)]
    pub optional: bool,
}

impl Column {
    /// Create a required column.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            optional: false,
        }
    }

    /// Mark the column as optional on input.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Ordered columns of one table.
///
/// Column order is significant: insert parameters are bound positionally in
/// this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableSchema {
    /// Table identifier, rendered unquoted.
    pub table: String,
    pub columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(table: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
