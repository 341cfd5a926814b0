use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rowguard_cli::{
    CliError, LogFormat, OutputFormat, init_logging, load_table_schema, prepare, read_input,
    render_statements,
};
use rowguard_core::TableSchema;
use rowguard_query::{QueryGenerator, StatementKind};

#[derive(Parser, Debug)]
#[command(name = "rowguard", version, about = "Schema-driven SQL templates and input validation")]
struct Cli {
    /// Log output format (filter with RUST_LOG).
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the five statements generated for a table file.
    Statements(StatementsArgs),
    /// Validate JSON input for a statement and print the bound parameters.
    Check(CheckArgs),
    /// Print the JSON Schema of the table file format.
    JsonSchema,
}

#[derive(Args, Debug)]
struct StatementsArgs {
    /// Table definition (.toml or .json).
    table: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Table definition (.toml or .json).
    table: PathBuf,
    /// JSON object with the input fields, or `-` for stdin.
    input: PathBuf,
    /// Statement the input is meant for.
    #[arg(long, value_enum, default_value_t = Operation::Insert)]
    statement: Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    Get,
    Count,
    Fetch,
    Remove,
    Insert,
}

impl From<Operation> for StatementKind {
    fn from(value: Operation) -> Self {
        match value {
            Operation::Get => StatementKind::Get,
            Operation::Count => StatementKind::Count,
            Operation::Fetch => StatementKind::Fetch,
            Operation::Remove => StatementKind::Remove,
            Operation::Insert => StatementKind::Insert,
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    match cli.command {
        Command::Statements(args) => run_statements(args),
        Command::Check(args) => run_check(args),
        Command::JsonSchema => run_json_schema(),
    }
}

fn load_generator(path: &Path) -> Result<(TableSchema, QueryGenerator), CliError> {
    let schema = load_table_schema(path)?;
    tracing::info!(
        event = "table_loaded",
        path = %path.display(),
        table = %schema.table,
        columns = schema.columns.len()
    );
    let generator = QueryGenerator::from_schema(&schema);
    Ok((schema, generator))
}

fn run_statements(args: StatementsArgs) -> Result<(), CliError> {
    let (_, generator) = load_generator(&args.table)?;
    println!("{}", render_statements(&generator, args.format)?);
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let (schema, generator) = load_generator(&args.table)?;
    let input = read_input(&args.input)?;
    let kind = StatementKind::from(args.statement);

    match prepare(&schema, &generator, kind, &input) {
        Ok(prepared) => {
            tracing::info!(
                event = "input_accepted",
                statement = %kind,
                params = prepared.params.len()
            );
            println!("{}", serde_json::to_string_pretty(&prepared)?);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(event = "input_rejected", statement = %kind, error = %err);
            Err(err)
        }
    }
}

fn run_json_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(TableSchema);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
