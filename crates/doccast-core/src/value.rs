mod document;
pub use document::Document;

mod item;
pub(crate) use item::Contents;
pub use item::{Item, ItemClass};

mod json;

use crate::{Error, Result};
use bson::Bson;

/// A dynamically typed value walked by [`Schema::cast`](crate::Schema::cast).
///
/// Values fall in three groups. *Scalars* (`Bool`, `I64`, `F64`, `String`)
/// are what type handlers coerce. *Structured* values (`List`, `Document`)
/// are walked recursively and handed to the item factory. *Objects*
/// (`Native`, `Item`) are already in their final form and are never touched
/// again, except when a field is declared as an array.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// An ordered sequence of values
    List(Vec<Value>),

    /// An ordered string-keyed mapping
    Document(Document),

    /// A store-native value produced by a type handler
    Native(Bson),

    /// A materialized entity or array
    Item(Item),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for values that type handlers accept.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::I64(_) | Self::F64(_) | Self::String(_)
        )
    }

    /// Returns `true` for lists and documents.
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::List(_) | Self::Document(_))
    }

    /// Returns `true` for store-native values and materialized items.
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Native(_) | Self::Item(_))
    }

    /// Returns `true` if the value is a list, or a document whose keys are
    /// exactly `"0"` to `"n-1"` in order.
    pub fn is_sequential(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::Document(doc) => doc.is_sequential(),
            _ => false,
        }
    }

    /// Name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Document(_) => "Document",
            Self::Native(_) => "Native",
            Self::Item(_) => "Item",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_native(&self) -> Option<&Bson> {
        match self {
            Self::Native(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Item(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_document(self) -> Result<Document> {
        match self {
            Self::Document(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "Document")),
        }
    }

    pub fn into_item(self) -> Result<Item> {
        match self {
            Self::Item(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "Item")),
        }
    }

    /// Looks up a dot-separated path through documents, lists and items.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(self, |value, key| match value {
            Self::Document(doc) => doc.get(key),
            Self::List(items) => items.get(key.parse::<usize>().ok()?),
            Self::Item(item) => item.get(key),
            _ => None,
        })
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

impl From<Document> for Value {
    fn from(src: Document) -> Self {
        Self::Document(src)
    }
}

impl From<Bson> for Value {
    fn from(src: Bson) -> Self {
        Self::Native(src)
    }
}

impl From<bson::oid::ObjectId> for Value {
    fn from(src: bson::oid::ObjectId) -> Self {
        Self::Native(Bson::ObjectId(src))
    }
}

impl From<Item> for Value {
    fn from(src: Item) -> Self {
        Self::Item(src)
    }
}
