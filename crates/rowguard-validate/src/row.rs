use rowguard_core::TableSchema;
use serde_json::{Map, Value};
use tracing::debug;

use crate::dispatch::validate_column;
use crate::errors::{Result, Shape, ValidationError};
use crate::rules::{validate_datatype, validate_defined, validate_uuid};
use crate::value::{InputValue, PrimitiveKind};

/// Property name of the row key bound by the get and remove statements.
pub const KEY_PROPERTY: &str = "uuid";

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Validate a raw row against a table schema.
///
/// Columns are checked in schema order and absent keys count as null. On
/// success the values are returned in schema order, ready to bind to the
/// insert statement. Keys that are not columns are ignored.
pub fn validate_row(schema: &TableSchema, row: &Map<String, Value>) -> Result<Vec<InputValue>> {
    let mut values = Vec::with_capacity(schema.columns.len());
    for column in &schema.columns {
        let input = row.get(&column.name).map_or(InputValue::Null, InputValue::from);
        if let Err(err) = validate_column(column, &input) {
            debug!(table = %schema.table, column = %column.name, error = %err, "row rejected");
            return Err(err);
        }
        values.push(input);
    }
    Ok(values)
}

/// Validate the row key bound by the get and remove statements.
pub fn validate_key(input: &InputValue) -> Result<()> {
    validate_uuid(input, KEY_PROPERTY, false)
}

/// Validated `LIMIT`/`OFFSET` pair for the fetch statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Page {
    /// Parameters in binding order: limit, then offset.
    pub fn params(&self) -> [u64; 2] {
        [self.limit, self.offset]
    }
}

/// Validate pagination inputs as required non-negative integers.
pub fn validate_pagination(limit: &InputValue, offset: &InputValue) -> Result<Page> {
    Ok(Page {
        limit: validate_unsigned(limit, "limit")?,
        offset: validate_unsigned(offset, "offset")?,
    })
}

fn validate_unsigned(input: &InputValue, property: &str) -> Result<u64> {
    validate_defined(input, property, false)?;
    validate_datatype(input, property, PrimitiveKind::Number)?;

    let parsed = match *input {
        InputValue::Integer(value) => u64::try_from(value).ok(),
        InputValue::Float(value)
            if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value < TWO_POW_64 =>
        {
            Some(value as u64)
        }
        _ => None,
    };
    parsed.ok_or_else(|| ValidationError::invalid(property, Shape::Unsigned))
}
