use super::{Document, Value};
use crate::schema::Model;
use std::sync::Arc;

/// Which shape an [`Item`] takes, as decided by the caster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    /// A keyed sub-document
    Entity,

    /// An ordered sequence of values
    Array,
}

/// A materialized entity or array, as returned by a
/// [`Database`](crate::Database) item factory.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Model the item belongs to, if any
    model: Option<Arc<Model>>,

    /// Field path the item was built at; `None` for a root entity
    path_key: Option<String>,

    contents: Contents,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Contents {
    Entity(Document),
    Array(Vec<Value>),
}

impl Item {
    pub fn entity(model: Option<Arc<Model>>, path_key: Option<String>, fields: Document) -> Self {
        Self {
            model,
            path_key,
            contents: Contents::Entity(fields),
        }
    }

    pub fn array(model: Option<Arc<Model>>, path_key: Option<String>, items: Vec<Value>) -> Self {
        Self {
            model,
            path_key,
            contents: Contents::Array(items),
        }
    }

    pub fn class(&self) -> ItemClass {
        match self.contents {
            Contents::Entity(_) => ItemClass::Entity,
            Contents::Array(_) => ItemClass::Array,
        }
    }

    pub fn is_entity(&self) -> bool {
        self.class() == ItemClass::Entity
    }

    pub fn is_array(&self) -> bool {
        self.class() == ItemClass::Array
    }

    pub fn model(&self) -> Option<&Arc<Model>> {
        self.model.as_ref()
    }

    pub fn path_key(&self) -> Option<&str> {
        self.path_key.as_deref()
    }

    /// Returns a field of an entity, or an element of an array by its
    /// decimal index.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match &self.contents {
            Contents::Entity(fields) => fields.get(key),
            Contents::Array(items) => items.get(key.parse::<usize>().ok()?),
        }
    }

    pub fn len(&self) -> usize {
        match &self.contents {
            Contents::Entity(fields) => fields.len(),
            Contents::Array(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_document(&self) -> Option<&Document> {
        match &self.contents {
            Contents::Entity(fields) => Some(fields),
            Contents::Array(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match &self.contents {
            Contents::Entity(_) => None,
            Contents::Array(items) => Some(items),
        }
    }

    /// Unwraps the item into its contents: a document for an entity, a list
    /// for an array. Nested items are kept as they are.
    pub fn into_value(self) -> Value {
        match self.contents {
            Contents::Entity(fields) => Value::Document(fields),
            Contents::Array(items) => Value::List(items),
        }
    }

    pub(crate) fn contents_mut(&mut self) -> &mut Contents {
        &mut self.contents
    }
}
