use serde_json::{Number, Value};

/// Primitive kinds a raw input can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Function,
    Symbol,
    Bigint,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Function => "function",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Bigint => "bigint",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An already-parsed raw input value.
///
/// Integers keep full precision in `i128` so that 64-bit bounds are compared
/// exactly. Arrays and objects are kept as `Composite` and rejected by every
/// rule that expects a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Null,
    Boolean(bool),
    Integer(i128),
    Float(f64),
    String(String),
    Composite(Value),
}

impl InputValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            InputValue::Null => PrimitiveKind::Undefined,
            InputValue::Boolean(_) => PrimitiveKind::Boolean,
            InputValue::Integer(_) | InputValue::Float(_) => PrimitiveKind::Number,
            InputValue::String(_) => PrimitiveKind::String,
            InputValue::Composite(_) => PrimitiveKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, InputValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InputValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// JSON form used when handing bound parameters to a driver or printing them.
    ///
    /// Integers outside the `i64`/`u64` range are rendered as decimal strings.
    pub fn to_json(&self) -> Value {
        match self {
            InputValue::Null => Value::Null,
            InputValue::Boolean(value) => Value::Bool(*value),
            InputValue::Integer(value) => {
                if let Ok(small) = i64::try_from(*value) {
                    Value::from(small)
                } else if let Ok(unsigned) = u64::try_from(*value) {
                    Value::from(unsigned)
                } else {
                    Value::String(value.to_string())
                }
            }
            InputValue::Float(value) => Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            InputValue::String(value) => Value::String(value.clone()),
            InputValue::Composite(value) => value.clone(),
        }
    }
}

impl From<&Value> for InputValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => InputValue::Null,
            Value::Bool(flag) => InputValue::Boolean(*flag),
            Value::Number(number) => number_to_input(number),
            Value::String(text) => InputValue::String(text.clone()),
            Value::Array(_) | Value::Object(_) => InputValue::Composite(value.clone()),
        }
    }
}

fn number_to_input(number: &Number) -> InputValue {
    if let Some(value) = number.as_i64() {
        InputValue::Integer(i128::from(value))
    } else if let Some(value) = number.as_u64() {
        InputValue::Integer(i128::from(value))
    } else {
        InputValue::Float(number.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::String(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::String(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Boolean(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Float(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for InputValue {
                fn from(value: $ty) -> Self {
                    InputValue::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl<T: Into<InputValue>> From<Option<T>> for InputValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(InputValue::Null, Into::into)
    }
}
