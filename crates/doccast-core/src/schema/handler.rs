mod date;
mod numeric;

use crate::Value;
use bson::{oid::ObjectId, spec::BinarySubtype, Binary, Bson, Regex};
use std::sync::Arc;

/// Coerces a scalar into the store-native form of a logical type.
///
/// Every built-in variant is a pure function of its input. Handlers only act
/// on scalars; any other value is returned unchanged.
#[derive(Clone)]
pub enum Handler {
    /// 24 lowercase hex characters become an `ObjectId`
    Id,

    /// Unix timestamps and date strings become a `DateTime`
    Date,

    /// The string form becomes a regular expression
    Regex,

    /// Integer coercion
    Integer,

    /// Float coercion
    Float,

    /// Truthiness
    Boolean,

    /// The string form becomes JavaScript code
    Code,

    /// The string form becomes a generic binary blob
    Binary,

    /// A user supplied coercion
    Custom(Arc<dyn Fn(Value) -> Value + Send + Sync>),
}

impl Handler {
    pub fn custom(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Built-in handlers, by logical type name.
    pub(super) fn builtins() -> impl Iterator<Item = (&'static str, Handler)> {
        [
            ("id", Self::Id),
            ("date", Self::Date),
            ("regex", Self::Regex),
            ("integer", Self::Integer),
            ("float", Self::Float),
            ("boolean", Self::Boolean),
            ("code", Self::Code),
            ("binary", Self::Binary),
        ]
        .into_iter()
    }

    pub fn apply(&self, value: Value) -> Value {
        if !value.is_scalar() {
            return value;
        }

        match self {
            Self::Id => object_id(value),
            Self::Date => Value::Native(Bson::DateTime(date::resolve(&value).into_bson())),
            Self::Regex => {
                let src = numeric::to_string(&value);
                Value::Native(Bson::RegularExpression(regex(src)))
            }
            Self::Integer => Value::I64(numeric::to_i64(&value)),
            Self::Float => Value::F64(numeric::to_f64(&value)),
            Self::Boolean => Value::Bool(numeric::to_bool(&value)),
            Self::Code => Value::Native(Bson::JavaScriptCode(numeric::to_string(&value))),
            Self::Binary => Value::Native(Bson::Binary(Binary {
                subtype: BinarySubtype::Generic,
                bytes: numeric::to_string(&value).into_bytes(),
            })),
            Self::Custom(f) => f(value),
        }
    }
}

impl core::fmt::Debug for Handler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Id => f.write_str("Id"),
            Self::Date => f.write_str("Date"),
            Self::Regex => f.write_str("Regex"),
            Self::Integer => f.write_str("Integer"),
            Self::Float => f.write_str("Float"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Code => f.write_str("Code"),
            Self::Binary => f.write_str("Binary"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn object_id(value: Value) -> Value {
    match value {
        Value::String(src) if is_object_id_hex(&src) => match ObjectId::parse_str(&src) {
            Ok(oid) => Value::Native(Bson::ObjectId(oid)),
            Err(_) => Value::String(src),
        },
        value => value,
    }
}

fn is_object_id_hex(src: &str) -> bool {
    src.len() == 24 && src.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// `/pattern/flags` is split into its parts; anything else is all pattern.
/// Flags are sorted and deduplicated.
fn regex(src: String) -> Regex {
    if let Some((pattern, flags)) = src
        .strip_prefix('/')
        .and_then(|rest| rest.rsplit_once('/'))
    {
        let mut options: Vec<char> = flags.chars().collect();
        options.sort_unstable();
        options.dedup();

        return Regex {
            pattern: pattern.to_string(),
            options: options.into_iter().collect(),
        };
    }

    Regex {
        pattern: src,
        options: String::new(),
    }
}
