use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CliError, CliResult};

/// Read a JSON input object from a file, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> CliResult<Map<String, Value>> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    parse_input(&content)
}

/// Parse input fields; the body must be a JSON object.
pub fn parse_input(content: &str) -> CliResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        other => Err(CliError::InvalidInput(format!(
            "input must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
