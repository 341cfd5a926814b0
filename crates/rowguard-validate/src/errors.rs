use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::value::PrimitiveKind;

/// Expected shape reported by [`ValidationError::InvalidProperty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// The value had the wrong primitive kind.
    Kind(PrimitiveKind),
    Date,
    Uuid,
    Email,
    Time,
    Length,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    IpAddress,
    Unsigned,
}

impl Shape {
    /// Tag reported to callers, e.g. `string`, `uuidv4`, `tinyint`.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Kind(kind) => kind.as_str(),
            Shape::Date => "date",
            Shape::Uuid => "uuidv4",
            Shape::Email => "email",
            Shape::Time => "time",
            Shape::Length => "length",
            Shape::TinyInt => "tinyint",
            Shape::SmallInt => "smallint",
            Shape::Int => "int",
            Shape::BigInt => "bigint",
            Shape::IpAddress => "ip",
            Shape::Unsigned => "unsigned",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Rejection of a single input value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required property was null or absent.
    #[error("missing property: {property}")]
    MissingProperty { property: String },
    /// A property was present but had the wrong kind, format or range.
    #[error("invalid property {property}: expected {expected}")]
    InvalidProperty { property: String, expected: Shape },
}

impl ValidationError {
    pub fn missing(property: impl Into<String>) -> Self {
        ValidationError::MissingProperty {
            property: property.into(),
        }
    }

    pub fn invalid(property: impl Into<String>, expected: Shape) -> Self {
        ValidationError::InvalidProperty {
            property: property.into(),
            expected,
        }
    }

    /// Name of the offending property.
    pub fn property(&self) -> &str {
        match self {
            ValidationError::MissingProperty { property }
            | ValidationError::InvalidProperty { property, .. } => property,
        }
    }
}

/// Result type for validation rules.
pub type Result<T> = std::result::Result<T, ValidationError>;
