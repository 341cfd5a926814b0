use rowguard_validate::{
    InputValue, Presence, PrimitiveKind, Shape, ValidationError, validate_any, validate_bigint,
    validate_boolean, validate_datatype, validate_date, validate_defined, validate_email,
    validate_int, validate_ip_address, validate_number, validate_smallint, validate_string,
    validate_time, validate_tinyint, validate_uuid, validate_varchar,
};

type RuleFn = fn(&InputValue, &str, bool) -> Result<(), ValidationError>;

const ALL_RULES: &[(&str, RuleFn)] = &[
    ("date", validate_date),
    ("uuid", validate_uuid),
    ("email", validate_email),
    ("time", validate_time),
    ("ip", validate_ip_address),
    ("boolean", validate_boolean),
    ("string", validate_string),
    ("varchar", validate_varchar),
    ("number", validate_number),
    ("tinyint", validate_tinyint),
    ("smallint", validate_smallint),
    ("int", validate_int),
    ("bigint", validate_bigint),
    ("any", validate_any),
];

fn invalid(expected: Shape) -> ValidationError {
    ValidationError::invalid("x", expected)
}

#[test]
fn absent_optional_values_pass_every_rule() {
    for (name, rule) in ALL_RULES {
        assert_eq!(rule(&InputValue::Null, "x", true), Ok(()), "rule {name}");
    }
}

#[test]
fn absent_required_values_are_missing() {
    for (name, rule) in ALL_RULES {
        assert_eq!(
            rule(&InputValue::Null, "x", false),
            Err(ValidationError::missing("x")),
            "rule {name}"
        );
    }
}

#[test]
fn none_converts_to_null() {
    let absent: Option<&str> = None;
    assert_eq!(validate_uuid(&absent.into(), "x", true), Ok(()));
    assert_eq!(
        validate_uuid(&absent.into(), "x", false),
        Err(ValidationError::missing("x"))
    );
}

#[test]
fn presence_gate_classifies_values() {
    assert_eq!(validate_defined(&InputValue::Null, "x", true), Ok(Presence::Absent));
    assert_eq!(validate_defined(&"".into(), "x", false), Ok(Presence::Present));
    assert_eq!(validate_defined(&false.into(), "x", false), Ok(Presence::Present));
    assert_eq!(validate_defined(&0.into(), "x", false), Ok(Presence::Present));
}

#[test]
fn datatype_gate_reports_expected_kind() {
    assert_eq!(
        validate_datatype(&"12".into(), "x", PrimitiveKind::Number),
        Err(invalid(Shape::Kind(PrimitiveKind::Number)))
    );
    assert_eq!(validate_datatype(&12.5.into(), "x", PrimitiveKind::Number), Ok(()));
    assert_eq!(validate_datatype(&12.into(), "x", PrimitiveKind::Number), Ok(()));
}

#[test]
fn wrong_kind_fails_before_shape_check() {
    assert_eq!(
        validate_uuid(&42.into(), "x", false),
        Err(invalid(Shape::Kind(PrimitiveKind::String)))
    );
    assert_eq!(
        validate_tinyint(&"1000".into(), "x", false),
        Err(invalid(Shape::Kind(PrimitiveKind::Number)))
    );
    assert_eq!(
        validate_boolean(&"true".into(), "x", false),
        Err(invalid(Shape::Kind(PrimitiveKind::Boolean)))
    );

    let composite = InputValue::from(&serde_json::json!({"nested": true}));
    assert_eq!(
        validate_string(&composite, "x", false),
        Err(invalid(Shape::Kind(PrimitiveKind::String)))
    );
}

#[test]
fn uuid_accepts_canonical_layout() {
    assert_eq!(
        validate_uuid(&"123e4567-e89b-12d3-a456-426614174000".into(), "x", false),
        Ok(())
    );
    assert_eq!(
        validate_uuid(&"123E4567-E89B-12D3-A456-426614174000".into(), "x", false),
        Ok(())
    );
    assert_eq!(
        validate_uuid(&"not-a-uuid".into(), "x", false),
        Err(invalid(Shape::Uuid))
    );
    assert_eq!(
        validate_uuid(&"123e4567e89b12d3a456426614174000".into(), "x", false),
        Err(invalid(Shape::Uuid))
    );
    assert_eq!(
        validate_uuid(&"{123e4567-e89b-12d3-a456-426614174000}".into(), "x", false),
        Err(invalid(Shape::Uuid))
    );
}

#[test]
fn date_checks_calendar_days() {
    assert_eq!(validate_date(&"2023-01-31T23:59:59.999Z".into(), "x", false), Ok(()));
    assert_eq!(
        validate_date(&"2023-02-30T00:00:00.000Z".into(), "x", false),
        Err(invalid(Shape::Date))
    );
    assert_eq!(
        validate_date(&"2023-06-31T00:00:00.000Z".into(), "x", false),
        Err(invalid(Shape::Date))
    );
    assert_eq!(
        validate_date(&"2023-01-31T24:00:00.000Z".into(), "x", false),
        Err(invalid(Shape::Date))
    );
    assert_eq!(
        validate_date(&"2023-01-31T23:59:59Z".into(), "x", false),
        Err(invalid(Shape::Date))
    );
    assert_eq!(
        validate_date(&"2023-01-31".into(), "x", false),
        Err(invalid(Shape::Date))
    );
}

#[test]
fn email_accepts_common_forms() {
    for email in [
        "user@example.com",
        "first.last@sub.example.org",
        "\"quoted user\"@example.com",
        "user@[192.168.0.1]",
        "USER@EXAMPLE.COM",
    ] {
        assert_eq!(validate_email(&email.into(), "x", false), Ok(()), "{email}");
    }

    for email in [
        "user",
        "user@",
        "@example.com",
        "user@example",
        "a b@example.com",
        "user@example.c",
    ] {
        assert_eq!(
            validate_email(&email.into(), "x", false),
            Err(invalid(Shape::Email)),
            "{email}"
        );
    }
}

#[test]
fn time_accepts_hours_up_to_24() {
    for time in ["0:00", "09:30", "23:59:59", "24:00"] {
        assert_eq!(validate_time(&time.into(), "x", false), Ok(()), "{time}");
    }
    for time in ["25:00", "12:5", "12:60", "12:00:60", "noon"] {
        assert_eq!(
            validate_time(&time.into(), "x", false),
            Err(invalid(Shape::Time)),
            "{time}"
        );
    }
}

#[test]
fn ip_address_accepts_v4_and_v6() {
    assert_eq!(validate_ip_address(&"10.0.0.1".into(), "x", false), Ok(()));
    assert_eq!(validate_ip_address(&"::1".into(), "x", false), Ok(()));
    assert_eq!(
        validate_ip_address(&"300.0.0.1".into(), "x", false),
        Err(invalid(Shape::IpAddress))
    );
}

#[test]
fn varchar_length_bounds_are_inclusive() {
    let ok_short = "abc".to_string();
    let ok_long = "a".repeat(255);
    assert_eq!(validate_varchar(&ok_short.into(), "x", false), Ok(()));
    assert_eq!(validate_varchar(&ok_long.into(), "x", false), Ok(()));

    assert_eq!(
        validate_varchar(&"ab".into(), "x", false),
        Err(invalid(Shape::Length))
    );
    assert_eq!(
        validate_varchar(&"a".repeat(256).into(), "x", false),
        Err(invalid(Shape::Length))
    );
}

#[test]
fn varchar_counts_utf16_units() {
    // One astral-plane character is two UTF-16 units.
    assert_eq!(
        validate_varchar(&"\u{1F600}".into(), "x", false),
        Err(invalid(Shape::Length))
    );
    assert_eq!(validate_varchar(&"\u{1F600}a".into(), "x", false), Ok(()));
}

#[test]
fn number_accepts_finite_values() {
    assert_eq!(validate_number(&1.5e300.into(), "x", false), Ok(()));
    assert_eq!(validate_number(&(-7).into(), "x", false), Ok(()));
}

#[test]
fn number_rejects_non_finite_values() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let input = InputValue::from(value);
        assert_eq!(
            validate_number(&input, "x", false),
            Err(invalid(Shape::Kind(PrimitiveKind::Number))),
            "{value}"
        );
    }
}

#[test]
fn accepted_numbers_never_bind_as_null() {
    for value in [0.0, -0.5, 1.5e300, f64::MIN_POSITIVE] {
        let input = InputValue::from(value);
        assert_eq!(validate_number(&input, "x", false), Ok(()));
        assert!(!input.to_json().is_null(), "{value} rendered as null");
    }
}

#[test]
fn tinyint_range() {
    assert_eq!(validate_tinyint(&127.into(), "x", false), Ok(()));
    assert_eq!(validate_tinyint(&(-128).into(), "x", false), Ok(()));
    assert_eq!(
        validate_tinyint(&128.into(), "x", false),
        Err(invalid(Shape::TinyInt))
    );
    assert_eq!(
        validate_tinyint(&(-129).into(), "x", false),
        Err(invalid(Shape::TinyInt))
    );
    assert_eq!(
        validate_tinyint(&127.5.into(), "x", false),
        Err(invalid(Shape::TinyInt))
    );
}

#[test]
fn smallint_and_int_ranges() {
    assert_eq!(validate_smallint(&32767.into(), "x", false), Ok(()));
    assert_eq!(validate_smallint(&(-32768).into(), "x", false), Ok(()));
    assert_eq!(
        validate_smallint(&32768.into(), "x", false),
        Err(invalid(Shape::SmallInt))
    );

    assert_eq!(validate_int(&i32::MAX.into(), "x", false), Ok(()));
    assert_eq!(validate_int(&i32::MIN.into(), "x", false), Ok(()));
    assert_eq!(
        validate_int(&(i64::from(i32::MAX) + 1).into(), "x", false),
        Err(invalid(Shape::Int))
    );
    assert_eq!(
        validate_int(&f64::NAN.into(), "x", false),
        Err(invalid(Shape::Int))
    );
}

#[test]
fn bigint_bounds_are_exact() {
    assert_eq!(validate_bigint(&i64::MAX.into(), "x", false), Ok(()));
    assert_eq!(validate_bigint(&i64::MIN.into(), "x", false), Ok(()));
    assert_eq!(
        validate_bigint(&(i128::from(i64::MAX) + 1).into(), "x", false),
        Err(invalid(Shape::BigInt))
    );
    assert_eq!(
        validate_bigint(&(i128::from(i64::MIN) - 1).into(), "x", false),
        Err(invalid(Shape::BigInt))
    );
    assert_eq!(
        validate_bigint(&9_223_372_036_854_775_808.0_f64.into(), "x", false),
        Err(invalid(Shape::BigInt))
    );
}

#[test]
fn bigint_from_json_keeps_precision() {
    let json: serde_json::Value =
        serde_json::from_str("[9223372036854775807, 9223372036854775808]").expect("parse json");
    let values: Vec<InputValue> = json
        .as_array()
        .expect("array")
        .iter()
        .map(InputValue::from)
        .collect();

    assert_eq!(validate_bigint(&values[0], "x", false), Ok(()));
    assert_eq!(
        validate_bigint(&values[1], "x", false),
        Err(invalid(Shape::BigInt))
    );
}

#[test]
fn errors_render_property_and_tag() {
    let err = invalid(Shape::Uuid);
    assert_eq!(err.to_string(), "invalid property x: expected uuidv4");
    assert_eq!(err.property(), "x");
    assert_eq!(
        ValidationError::missing("email").to_string(),
        "missing property: email"
    );

    let json = serde_json::to_value(invalid(Shape::TinyInt)).expect("serialize error");
    assert_eq!(
        json,
        serde_json::json!({"kind": "invalid_property", "property": "x", "expected": "tinyint"})
    );
}

#[test]
fn rules_are_safe_to_call_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                for _ in 0..200 {
                    assert_eq!(
                        validate_uuid(&"123e4567-e89b-12d3-a456-426614174000".into(), "x", false),
                        Ok(())
                    );
                    assert_eq!(
                        validate_tinyint(&(i * 100).into(), "x", false).is_ok(),
                        i * 100 <= 127
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
