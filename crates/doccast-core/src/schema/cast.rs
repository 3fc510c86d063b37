use super::{Model, Schema};
use crate::{
    driver::{Database, ItemOptions},
    value::{Contents, Item, ItemClass},
    Document, Error, Result, Value,
};
use std::sync::Arc;

/// Options for a single [`Schema::cast`] call.
#[derive(Debug, Default, Clone, Copy)]
pub struct CastOptions<'a> {
    /// Path of `data` within its root document; `None` or empty for the root.
    pub path_key: Option<&'a str>,

    /// Owning model. Defaults to the container's model.
    pub model: Option<&'a Arc<Model>>,

    /// Schema handed to the item factory. Defaults to the casting schema.
    pub schema: Option<&'a Schema>,

    /// Item factory for nested values.
    pub database: Option<&'a dyn Database>,
}

impl<'a> CastOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_key(mut self, path_key: &'a str) -> Self {
        self.path_key = Some(path_key);
        self
    }

    pub fn model(mut self, model: &'a Arc<Model>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn schema(mut self, schema: &'a Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn database(mut self, database: &'a dyn Database) -> Self {
        self.database = Some(database);
        self
    }
}

/// State shared by every entry of one `cast` call.
struct Walk<'a> {
    schema: &'a Schema,
    item_schema: &'a Schema,
    model: Option<&'a Arc<Model>>,
    database: Option<&'a dyn Database>,
    base: Option<&'a str>,
}

impl Schema {
    /// Coerces a scalar according to the resolved type of `field`.
    ///
    /// Non-scalars, fields without a type and types without a handler pass
    /// through unchanged.
    pub fn cast_type(&self, value: Value, field: &str) -> Value {
        if !value.is_scalar() {
            return value;
        }

        match self.ty(field).and_then(|ty| self.handlers.get(ty)) {
            Some(handler) => handler.apply(value),
            None => value,
        }
    }

    /// Casts `data` against the schema.
    ///
    /// A scalar is coerced at `options.path_key`. For a document, list or
    /// item, every entry is visited at `path_key.key`:
    ///
    /// * objects (native values, items) and every entry of an item container
    ///   are left alone, unless the field is declared as an array;
    /// * other non-structured values are coerced with [`cast_type`];
    /// * structured values, and anything at an array field, are handed to
    ///   `options.database` as an [`ItemClass::Array`] when the field is an
    ///   array or the value is sequential, and as an [`ItemClass::Entity`]
    ///   otherwise. A non-structured value bound for an array is wrapped in
    ///   a single-element list.
    ///
    /// Keys and their order are preserved.
    ///
    /// [`cast_type`]: Schema::cast_type
    pub fn cast(
        &self,
        container: Option<&Item>,
        data: Value,
        options: CastOptions<'_>,
    ) -> Result<Value> {
        let model = match options.model {
            Some(model) => Some(model),
            None => container.and_then(Item::model),
        };
        let base = options.path_key.filter(|path_key| !path_key.is_empty());

        if data.is_scalar() {
            return Ok(match base {
                Some(field) => self.cast_type(data, field),
                None => data,
            });
        }

        let walk = Walk {
            schema: self,
            item_schema: options.schema.unwrap_or(self),
            model,
            database: options.database,
            base,
        };

        match data {
            Value::Document(mut fields) => {
                walk.fields(&mut fields, false)?;
                Ok(Value::Document(fields))
            }
            Value::List(mut items) => {
                walk.items(&mut items, false)?;
                Ok(Value::List(items))
            }
            Value::Item(mut item) => {
                match item.contents_mut() {
                    Contents::Entity(fields) => walk.fields(fields, true)?,
                    Contents::Array(items) => walk.items(items, true)?,
                }
                Ok(Value::Item(item))
            }
            data => Ok(data),
        }
    }
}

impl Walk<'_> {
    fn fields(&self, fields: &mut Document, in_object: bool) -> Result<()> {
        for (key, value) in fields.iter_mut() {
            let src = std::mem::take(value);
            *value = self.entry(key, src, in_object)?;
        }
        Ok(())
    }

    fn items(&self, items: &mut [Value], in_object: bool) -> Result<()> {
        for (index, value) in items.iter_mut().enumerate() {
            let src = std::mem::take(value);
            *value = self.entry(&index.to_string(), src, in_object)?;
        }
        Ok(())
    }

    fn entry(&self, key: &str, value: Value, in_object: bool) -> Result<Value> {
        let path_key = match self.base {
            Some(base) => format!("{base}.{key}"),
            None => key.to_string(),
        };
        let is_array = self.schema.is("array", &path_key);

        if (value.is_object() || in_object) && !is_array {
            return Ok(value);
        }

        if !value.is_structured() && !is_array {
            return Ok(self.schema.cast_type(value, &path_key));
        }

        let (class, value) = if is_array || value.is_sequential() {
            let value = if value.is_structured() {
                value
            } else {
                Value::List(vec![value])
            };
            (ItemClass::Array, value)
        } else {
            (ItemClass::Entity, value)
        };

        let Some(database) = self.database else {
            return Err(Error::missing_database(path_key));
        };

        log::trace!("building nested item; path_key={path_key} class={class:?}");

        let item = database.item(
            self.model,
            value,
            ItemOptions {
                path_key: Some(&path_key),
                class,
                schema: self.item_schema,
                database,
            },
        )?;

        Ok(Value::Item(item))
    }
}
