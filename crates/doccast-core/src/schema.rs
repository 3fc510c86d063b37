mod builder;
pub use builder::Builder;

mod cast;
pub use cast::CastOptions;

mod config;
pub use config::{Config, FieldConfig};

mod field;
pub use field::Field;

mod handler;
pub use handler::Handler;

mod model;
pub use model::Model;

mod types;

use crate::{Document, Result};
use indexmap::IndexMap;

/// Maps declared field types to store-native coercions.
///
/// A schema owns three tables, all fixed once [`Builder::build`] returns:
/// the declared fields, the aliases from store-native type names to logical
/// type names, and the handlers for each logical type.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Declared fields, keyed by dot-separated path
    fields: IndexMap<String, Field>,

    /// Store-native type name to logical type name
    aliases: IndexMap<String, String>,

    /// Logical type name to coercion
    handlers: IndexMap<String, Handler>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a schema from a JSON configuration.
    pub fn from_json(src: &str) -> Result<Schema> {
        Builder::from_config(Config::from_json(src)?).build()
    }

    /// Resolves the logical type of a field.
    ///
    /// Returns `None` when the field is undeclared or declared without a
    /// type. A declared type that is a known alias resolves to its target;
    /// any other declared type is returned as is.
    pub fn ty(&self, field: &str) -> Option<&str> {
        let declared = self.fields.get(field)?.ty.as_deref()?;

        Some(
            self.aliases
                .get(declared)
                .map(String::as_str)
                .unwrap_or(declared),
        )
    }

    /// Returns `true` if `field` is of logical type `ty`.
    ///
    /// `"array"` is special: it matches fields flagged as arrays as well as
    /// fields declared with type `"array"`.
    pub fn is(&self, ty: &str, field: &str) -> bool {
        if ty == "array" {
            return self.fields.get(field).is_some_and(Field::is_array);
        }

        self.ty(field) == Some(ty)
    }

    /// Declared field paths, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Default values of the fields that declare one.
    pub fn defaults(&self) -> Document {
        self.fields
            .iter()
            .filter_map(|(name, field)| Some((name.clone(), field.default.clone()?)))
            .collect()
    }

    pub fn handler(&self, ty: &str) -> Option<&Handler> {
        self.handlers.get(ty)
    }

    /// Logical type a store-native type name stands for.
    pub fn alias(&self, native: &str) -> Option<&str> {
        self.aliases.get(native).map(String::as_str)
    }
}
