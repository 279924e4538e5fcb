use serde_json::Value as JsonValue;

use super::{Replacements, Value};

/// The `replace` argument of a translation call.
///
/// Callers pass whatever is most convenient: nothing, a bare number, a bare
/// string, or a full [`Replacements`] set. Before substitution the argument
/// is normalized:
///
/// - a bare number `n` becomes `{count: n, value: n}`
/// - a bare string `s` becomes `{value: s, name: s}`
/// - [`Replace::Unsupported`] becomes no replacements at all
///
/// # Example
///
/// ```
/// use keytext::{Replace, Value};
///
/// let replace = Replace::from(5).normalize().unwrap();
/// assert_eq!(replace.get("count"), Some(&Value::Number(5)));
/// assert_eq!(replace.get("value"), Some(&Value::Number(5)));
///
/// let replace = Replace::from("John").normalize().unwrap();
/// assert_eq!(replace.get("name"), Some(&Value::from("John")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Replace {
    /// No replacement argument.
    #[default]
    Absent,

    /// A bare number or string.
    Value(Value),

    /// An explicit replacement set.
    Map(Replacements),

    /// A host value with no replacement meaning, such as a callback or a
    /// boolean. It counts as supplied but never substitutes anything.
    Unsupported,
}

impl Replace {
    /// Whether the caller supplied a replacement argument.
    ///
    /// Falsy bare values (`0`, `0.0`, NaN, `""`) count as not supplied. A
    /// map counts as supplied even when empty.
    pub fn is_supplied(&self) -> bool {
        match self {
            Replace::Absent => false,
            Replace::Value(value) => value.is_truthy(),
            Replace::Map(_) | Replace::Unsupported => true,
        }
    }

    /// Normalizes the argument into a replacement set.
    pub fn normalize(&self) -> Option<Replacements> {
        match self {
            Replace::Value(value) if !value.is_truthy() => None,
            Replace::Value(value) if value.is_numeric() => {
                Some(Replacements::for_count(value.clone()))
            }
            Replace::Value(value) => Some(
                [("value", value.clone()), ("name", value.clone())]
                    .into_iter()
                    .collect(),
            ),
            Replace::Map(replace) => Some(replace.clone()),
            Replace::Absent | Replace::Unsupported => None,
        }
    }
}

impl From<()> for Replace {
    fn from((): ()) -> Self {
        Replace::Absent
    }
}

impl From<Value> for Replace {
    fn from(value: Value) -> Self {
        Replace::Value(value)
    }
}

impl From<Replacements> for Replace {
    fn from(replace: Replacements) -> Self {
        Replace::Map(replace)
    }
}

impl From<&Replacements> for Replace {
    fn from(replace: &Replacements) -> Self {
        Replace::Map(replace.clone())
    }
}

impl<T: Into<Replace>> From<Option<T>> for Replace {
    fn from(replace: Option<T>) -> Self {
        replace.map_or(Replace::Absent, Into::into)
    }
}

impl From<JsonValue> for Replace {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null | JsonValue::Bool(false) => Replace::Absent,
            JsonValue::Bool(true) => Replace::Unsupported,
            JsonValue::Number(n) => Replace::Value(Value::from(&n)),
            JsonValue::String(s) => Replace::Value(Value::String(s)),
            JsonValue::Array(items) => Replace::Map(
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| Value::from_json(item).map(|v| (i.to_string(), v)))
                    .collect(),
            ),
            JsonValue::Object(map) => Replace::Map(
                map.iter()
                    .filter_map(|(name, item)| Value::from_json(item).map(|v| (name.clone(), v)))
                    .collect(),
            ),
        }
    }
}

macro_rules! replace_from_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Replace {
                fn from(value: $ty) -> Self {
                    Replace::Value(Value::from(value))
                }
            }
        )+
    };
}

replace_from_value!(i32, i64, u32, u64, usize, f32, f64, String, &str, &String);
