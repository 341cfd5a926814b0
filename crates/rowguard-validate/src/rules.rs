//! Per-type validation rules.
//!
//! Every rule runs the same fixed sequence: presence, primitive kind, then an
//! optional shape check. The first failing step is returned; optional fields
//! that are absent stop the rule early with `Ok(())`.

use std::net::IpAddr;

use crate::errors::{Result, Shape, ValidationError};
use crate::patterns;
use crate::value::{InputValue, PrimitiveKind};

const VARCHAR_MIN_LEN: usize = 3;
const VARCHAR_MAX_LEN: usize = 255;

/// Outcome of the presence gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Null input on an optional field; the rule stops here.
    Absent,
    Present,
}

/// Classify a raw value as absent-and-allowed, missing, or present.
pub fn validate_defined(input: &InputValue, property: &str, optional: bool) -> Result<Presence> {
    if input.is_null() {
        if optional {
            return Ok(Presence::Absent);
        }
        return Err(ValidationError::missing(property));
    }

    Ok(Presence::Present)
}

/// Check that a present value has the expected primitive kind.
pub fn validate_datatype(input: &InputValue, property: &str, kind: PrimitiveKind) -> Result<()> {
    if input.kind() != kind {
        return Err(ValidationError::invalid(property, Shape::Kind(kind)));
    }
    Ok(())
}

/// Presence and kind gates combined. Returns `None` when the rule should stop early.
fn gate<'a>(
    input: &'a InputValue,
    property: &str,
    optional: bool,
    kind: PrimitiveKind,
) -> Result<Option<&'a InputValue>> {
    if validate_defined(input, property, optional)? == Presence::Absent {
        return Ok(None);
    }
    validate_datatype(input, property, kind)?;
    Ok(Some(input))
}

fn string_rule(
    input: &InputValue,
    property: &str,
    optional: bool,
    shape: Shape,
    accept: impl Fn(&str) -> bool,
) -> Result<()> {
    let Some(value) = gate(input, property, optional, PrimitiveKind::String)? else {
        return Ok(());
    };
    match value.as_str() {
        Some(text) if accept(text) => Ok(()),
        _ => Err(ValidationError::invalid(property, shape)),
    }
}

fn ranged_rule(
    input: &InputValue,
    property: &str,
    optional: bool,
    shape: Shape,
    min: i64,
    max: i64,
) -> Result<()> {
    let Some(value) = gate(input, property, optional, PrimitiveKind::Number)? else {
        return Ok(());
    };
    if within_range(value, min, max) {
        Ok(())
    } else {
        Err(ValidationError::invalid(property, shape))
    }
}

fn within_range(value: &InputValue, min: i64, max: i64) -> bool {
    match *value {
        InputValue::Integer(number) => number >= i128::from(min) && number <= i128::from(max),
        InputValue::Float(number) => float_within_range(number, min, max),
        _ => false,
    }
}

/// Compare a float against integer bounds without trusting a rounded bound.
///
/// `i64::MAX as f64` rounds up to 2^63, so when a bound rounds outward the
/// comparison becomes strict.
fn float_within_range(number: f64, min: i64, max: i64) -> bool {
    if !number.is_finite() {
        return false;
    }

    let lower = min as f64;
    let upper = max as f64;
    let lower_ok = if (lower as i128) < i128::from(min) {
        number > lower
    } else {
        number >= lower
    };
    let upper_ok = if (upper as i128) > i128::from(max) {
        number < upper
    } else {
        number <= upper
    };
    lower_ok && upper_ok
}

/// `YYYY-MM-DDThh:mm:ss.sssZ` timestamp with a real calendar day.
pub fn validate_date(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    string_rule(input, property, optional, Shape::Date, patterns::is_date)
}

/// Hyphenated 8-4-4-4-12 hex UUID.
pub fn validate_uuid(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    string_rule(input, property, optional, Shape::Uuid, patterns::is_uuid)
}

pub fn validate_email(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    string_rule(input, property, optional, Shape::Email, patterns::is_email)
}

/// `H:MM[:SS]` with hour 0-24.
pub fn validate_time(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    string_rule(input, property, optional, Shape::Time, patterns::is_time)
}

/// IPv4 or IPv6 address in its textual form.
pub fn validate_ip_address(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    string_rule(input, property, optional, Shape::IpAddress, |text| {
        text.parse::<IpAddr>().is_ok()
    })
}

pub fn validate_boolean(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    gate(input, property, optional, PrimitiveKind::Boolean).map(|_| ())
}

pub fn validate_string(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    gate(input, property, optional, PrimitiveKind::String).map(|_| ())
}

/// String of 3 to 255 UTF-16 code units.
pub fn validate_varchar(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    string_rule(input, property, optional, Shape::Length, |text| {
        let length = text.encode_utf16().count();
        (VARCHAR_MIN_LEN..=VARCHAR_MAX_LEN).contains(&length)
    })
}

/// Any finite number. NaN and infinities have no SQL representation.
pub fn validate_number(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    match gate(input, property, optional, PrimitiveKind::Number)? {
        Some(InputValue::Float(value)) if !value.is_finite() => Err(ValidationError::invalid(
            property,
            Shape::Kind(PrimitiveKind::Number),
        )),
        _ => Ok(()),
    }
}

pub fn validate_tinyint(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    ranged_rule(input, property, optional, Shape::TinyInt, i8::MIN.into(), i8::MAX.into())
}

pub fn validate_smallint(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    ranged_rule(input, property, optional, Shape::SmallInt, i16::MIN.into(), i16::MAX.into())
}

pub fn validate_int(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    ranged_rule(input, property, optional, Shape::Int, i32::MIN.into(), i32::MAX.into())
}

pub fn validate_bigint(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    ranged_rule(input, property, optional, Shape::BigInt, i64::MIN, i64::MAX)
}

/// Presence only; any present value is accepted.
pub fn validate_any(input: &InputValue, property: &str, optional: bool) -> Result<()> {
    validate_defined(input, property, optional).map(|_| ())
}
