//! SQL template generation for single-table CRUD.
//!
//! A [`QueryGenerator`] is built once per table and is immutable afterwards,
//! so it can be shared freely across threads.

pub mod generator;
pub mod statement;

pub use generator::QueryGenerator;
pub use statement::StatementKind;
