use std::path::Path;

use rowguard_core::{Error as CoreError, TableSchema, validate_table_schema};

use crate::error::CliResult;

/// Load a table definition from a `.toml` or `.json` file and check its identifiers.
pub fn load_table_schema(path: &Path) -> CliResult<TableSchema> {
    let content = std::fs::read_to_string(path)?;
    let schema = parse_table_schema(&content, path)?;
    validate_table_schema(&schema)?;
    Ok(schema)
}

fn parse_table_schema(content: &str, path: &Path) -> CliResult<TableSchema> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(toml::from_str(content)?),
        Some("json") => Ok(serde_json::from_str(content)?),
        _ => Err(CoreError::Unsupported(format!(
            "table file must end in .toml or .json: {}",
            path.display()
        ))
        .into()),
    }
}
