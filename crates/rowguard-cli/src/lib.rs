//! Library side of the `rowguard` binary: table file loading, logging setup,
//! statement rendering and input preparation.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod prepare;
pub mod render;

pub use config::load_table_schema;
pub use error::{CliError, CliResult};
pub use input::{parse_input, read_input};
pub use logging::{LogFormat, init_logging};
pub use prepare::{PreparedStatement, prepare};
pub use render::{OutputFormat, render_statements};
