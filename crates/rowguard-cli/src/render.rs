use clap::ValueEnum;
use rowguard_query::{QueryGenerator, StatementKind};
use serde::Serialize;

use crate::error::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct RenderedStatement<'a> {
    kind: &'static str,
    parameters: usize,
    sql: &'a str,
}

/// Render all five statements of a table.
pub fn render_statements(generator: &QueryGenerator, format: OutputFormat) -> CliResult<String> {
    let rendered: Vec<RenderedStatement<'_>> = StatementKind::ALL
        .into_iter()
        .map(|kind| RenderedStatement {
            kind: kind.as_str(),
            parameters: generator.parameter_count(kind),
            sql: generator.statement(kind),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rendered)?),
        OutputFormat::Text => {
            let blocks: Vec<String> = rendered
                .iter()
                .map(|statement| {
                    format!(
                        "-- {} ({} parameters)\n{};",
                        statement.kind, statement.parameters, statement.sql
                    )
                })
                .collect();
            Ok(blocks.join("\n\n"))
        }
    }
}
