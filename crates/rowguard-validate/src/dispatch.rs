use rowguard_core::{Column, ColumnType};

use crate::errors::Result;
use crate::rules;
use crate::value::InputValue;

/// Signature shared by every per-type rule: value, property name, optional flag.
pub type Rule = fn(&InputValue, &str, bool) -> Result<()>;

/// Validation rule attached to a column type.
///
/// A value accepted by this rule is always bindable to the placeholder that
/// [`ColumnType::value_expression`] renders for the same type.
pub fn rule_for(column_type: ColumnType) -> Rule {
    match column_type {
        ColumnType::Int => rules::validate_int,
        ColumnType::Timestamp => rules::validate_date,
        ColumnType::Uuid => rules::validate_uuid,
        ColumnType::Time => rules::validate_time,
        ColumnType::IpAddress => rules::validate_ip_address,
        ColumnType::TinyInt => rules::validate_tinyint,
        ColumnType::SmallInt => rules::validate_smallint,
        ColumnType::Email => rules::validate_email,
        ColumnType::String | ColumnType::LargeText => rules::validate_string,
        ColumnType::Number => rules::validate_number,
        ColumnType::Varchar => rules::validate_varchar,
        ColumnType::Boolean => rules::validate_boolean,
        ColumnType::Unknown => rules::validate_any,
    }
}

/// Validate one value against the rule for `column`, honoring its optional flag.
pub fn validate_column(column: &Column, input: &InputValue) -> Result<()> {
    rule_for(column.column_type)(input, &column.name, column.optional)
}
