use rowguard_core::TableSchema;
use rowguard_query::{QueryGenerator, StatementKind};
use rowguard_validate::{
    InputValue, KEY_PROPERTY, validate_key, validate_pagination, validate_row,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CliResult;

/// A statement paired with the validated parameters to bind to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedStatement {
    pub table: String,
    pub kind: &'static str,
    pub sql: String,
    pub params: Vec<Value>,
}

/// Validate `input` for the chosen statement and pair it with the template.
///
/// - insert: every column of `schema`, bound in schema order
/// - get / remove: the `uuid` key
/// - fetch: `limit` then `offset`
/// - count: nothing
pub fn prepare(
    schema: &TableSchema,
    generator: &QueryGenerator,
    kind: StatementKind,
    input: &Map<String, Value>,
) -> CliResult<PreparedStatement> {
    let field = |name: &str| input.get(name).map_or(InputValue::Null, InputValue::from);

    let params = match kind {
        StatementKind::Insert => validate_row(schema, input)?,
        StatementKind::Get | StatementKind::Remove => {
            let key = field(KEY_PROPERTY);
            validate_key(&key)?;
            vec![key]
        }
        StatementKind::Fetch => {
            let page = validate_pagination(&field("limit"), &field("offset"))?;
            page.params().into_iter().map(InputValue::from).collect()
        }
        StatementKind::Count => Vec::new(),
    };

    Ok(PreparedStatement {
        table: generator.table().to_string(),
        kind: kind.as_str(),
        sql: generator.statement(kind).to_string(),
        params: params.iter().map(InputValue::to_json).collect(),
    })
}
