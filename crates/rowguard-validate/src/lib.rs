//! Input validation for rowguard.
//!
//! Each rule checks a single raw value for presence, primitive kind and shape
//! before it is bound into a generated statement. Rules are pure and never
//! accumulate failures: the first failing check is returned.

pub mod dispatch;
pub mod errors;
mod patterns;
pub mod row;
pub mod rules;
pub mod value;

pub use dispatch::{Rule, rule_for, validate_column};
pub use errors::{Result, Shape, ValidationError};
pub use row::{KEY_PROPERTY, Page, validate_key, validate_pagination, validate_row};
pub use rules::{
    Presence, validate_any, validate_bigint, validate_boolean, validate_datatype, validate_date,
    validate_defined, validate_email, validate_int, validate_ip_address, validate_number,
    validate_smallint, validate_string, validate_time, validate_tinyint, validate_uuid,
    validate_varchar,
};
pub use value::{InputValue, PrimitiveKind};
