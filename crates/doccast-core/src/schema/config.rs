use super::Field;
use crate::{Error, Result, Value};
use indexmap::IndexMap;
use serde::Deserialize;

/// Declarative form of a schema, usually loaded from JSON.
///
/// ```json
/// {
///   "fields": {
///     "title": { "type": "string" },
///     "tags": { "type": "string", "array": true },
///     "published": { "type": "boolean", "default": false }
///   },
///   "aliases": { "Decimal128": "float" }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fields: IndexMap<String, FieldConfig>,

    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(rename = "type", default)]
    pub ty: Option<String>,

    #[serde(default)]
    pub array: bool,

    #[serde(default)]
    pub default: Option<serde_json::Value>,

    #[serde(default)]
    pub nullable: bool,
}

impl Config {
    pub fn from_json(src: &str) -> Result<Config> {
        serde_json::from_str(src).map_err(|err| {
            Error::from(err).context(Error::invalid_schema("malformed configuration"))
        })
    }
}

impl From<FieldConfig> for Field {
    fn from(config: FieldConfig) -> Self {
        Field {
            ty: config.ty,
            array: config.array,
            default: config.default.map(Value::from),
            nullable: config.nullable,
        }
    }
}
