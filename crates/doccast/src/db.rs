mod builder;
pub use builder::Builder;

use doccast_core::{
    driver::ItemOptions,
    schema::{CastOptions, Model},
    value::ItemClass,
    Database, Document, Error, Item, Result, Schema, Value,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// An in-memory item factory over a set of registered models.
///
/// `Db` materializes the entities and arrays the caster asks for and casts
/// their contents in turn, so a single [`Db::cast`] converts a whole nested
/// document.
#[derive(Debug)]
pub struct Db {
    models: IndexMap<String, Arc<Model>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn model(&self, name: &str) -> Result<&Arc<Model>> {
        self.models
            .get(name)
            .ok_or_else(|| Error::unknown_model(name))
    }

    pub fn models(&self) -> impl Iterator<Item = &Arc<Model>> {
        self.models.values()
    }

    /// Casts `data` at the root of the named model.
    pub fn cast(&self, model: &str, data: impl Into<Value>) -> Result<Value> {
        let model = self.model(model)?;
        let options = CastOptions::new().model(model).database(self);
        model.schema().cast(None, data.into(), options)
    }

    /// Builds a root entity of the named model.
    pub fn create(&self, model: &str, fields: Document) -> Result<Item> {
        let model = self.model(model)?;

        self.item(
            Some(model),
            Value::Document(fields),
            ItemOptions {
                path_key: None,
                class: ItemClass::Entity,
                schema: model.schema(),
                database: self,
            },
        )
    }
}

impl Database for Db {
    fn item(
        &self,
        model: Option<&Arc<Model>>,
        data: Value,
        options: ItemOptions<'_>,
    ) -> Result<Item> {
        let schema: &Schema = match model {
            Some(model) => model.schema(),
            None => options.schema,
        };

        log::trace!(
            "building {:?}; model={:?} path_key={:?}",
            options.class,
            model.map(|model| model.name()),
            options.path_key
        );

        match options.class {
            ItemClass::Entity => {
                let fields = match data {
                    Value::Document(fields) => fields,
                    Value::Item(item) => return Ok(item),
                    data => return Err(Error::type_conversion(data, "Document")),
                };

                let mut cast = CastOptions::new().schema(schema).database(options.database);
                if let Some(path_key) = options.path_key {
                    cast = cast.path_key(path_key);
                }
                if let Some(model) = model {
                    cast = cast.model(model);
                }

                let fields = schema
                    .cast(None, Value::Document(fields), cast)?
                    .into_document()?;

                Ok(Item::entity(
                    model.cloned(),
                    options.path_key.map(str::to_string),
                    fields,
                ))
            }
            ItemClass::Array => {
                let items: Vec<Value> = match data {
                    Value::List(items) => items,
                    Value::Document(fields) => fields.into_values().collect(),
                    data => vec![data],
                };

                let items = items
                    .into_iter()
                    .map(|value| element(schema, model, options, value))
                    .collect::<Result<Vec<_>>>()?;

                Ok(Item::array(
                    model.cloned(),
                    options.path_key.map(str::to_string),
                    items,
                ))
            }
        }
    }
}

/// Casts one element of an array. Elements share the array's path key, so a
/// field declared `{ type: "id", array: true }` coerces each element.
fn element(
    schema: &Schema,
    model: Option<&Arc<Model>>,
    options: ItemOptions<'_>,
    value: Value,
) -> Result<Value> {
    if value.is_scalar() {
        return Ok(match options.path_key {
            Some(path_key) => schema.cast_type(value, path_key),
            None => value,
        });
    }

    let class = if value.is_sequential() {
        ItemClass::Array
    } else if value.is_structured() {
        ItemClass::Entity
    } else {
        return Ok(value);
    };

    let item = options
        .database
        .item(model, value, ItemOptions { class, ..options })?;

    Ok(Value::Item(item))
}
