//! Core contracts for rowguard.
//!
//! This crate defines the column schema shared by the query generator and the
//! validation rules, plus the checks an integrator runs on a table definition
//! before trusting its identifiers.

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use schema::{Column, TableSchema};
pub use types::{ColumnType, UUID_DECODE_EXPR, VALUE_PLACEHOLDER};
pub use validation::validate_table_schema;
