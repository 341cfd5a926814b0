use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Plain positional placeholder bound to a single value.
pub const VALUE_PLACEHOLDER: &str = "?";

/// Placeholder that decodes a hyphenated UUID string into its 16-byte binary form.
pub const UUID_DECODE_EXPR: &str = "UNHEX(REPLACE(?, '-', ''))";

/// Semantic kind of a persisted column.
///
/// Every variant has exactly one placeholder expression (see
/// [`ColumnType::value_expression`]) and exactly one validation rule in
/// `rowguard-validate`. Both mappings are exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Int,
    Timestamp,
    Uuid,
    Time,
    IpAddress,
    TinyInt,
    SmallInt,
    Email,
    String,
    LargeText,
    Number,
    Varchar,
    Boolean,
    Unknown,
}

impl ColumnType {
    /// All column types, in declaration order.
    pub const ALL: [ColumnType; 14] = [
        ColumnType::Int,
        ColumnType::Timestamp,
        ColumnType::Uuid,
        ColumnType::Time,
        ColumnType::IpAddress,
        ColumnType::TinyInt,
        ColumnType::SmallInt,
        ColumnType::Email,
        ColumnType::String,
        ColumnType::LargeText,
        ColumnType::Number,
        ColumnType::Varchar,
        ColumnType::Boolean,
        ColumnType::Unknown,
    ];

    /// SQL expression used where a value of this type is bound.
    pub fn value_expression(self) -> &'static str {
        match self {
            ColumnType::Uuid => UUID_DECODE_EXPR,
            ColumnType::Int
            | ColumnType::Timestamp
            | ColumnType::Time
            | ColumnType::IpAddress
            | ColumnType::TinyInt
            | ColumnType::SmallInt
            | ColumnType::Email
            | ColumnType::String
            | ColumnType::LargeText
            | ColumnType::Number
            | ColumnType::Varchar
            | ColumnType::Boolean
            | ColumnType::Unknown => VALUE_PLACEHOLDER,
        }
    }

    /// Stable snake_case tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Uuid => "uuid",
            ColumnType::Time => "time",
            ColumnType::IpAddress => "ip_address",
            ColumnType::TinyInt => "tiny_int",
            ColumnType::SmallInt => "small_int",
            ColumnType::Email => "email",
            ColumnType::String => "string",
            ColumnType::LargeText => "large_text",
            ColumnType::Number => "number",
            ColumnType::Varchar => "varchar",
            ColumnType::Boolean => "boolean",
            ColumnType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
