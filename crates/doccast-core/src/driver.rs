use crate::{
    schema::Model,
    value::{Item, ItemClass},
    Result, Schema, Value,
};

use std::{fmt::Debug, sync::Arc};

/// Builds entities and arrays for nested values found by
/// [`Schema::cast`](crate::Schema::cast).
///
/// The caster decides *what* a nested value becomes; implementations decide
/// *how* it is materialized. A typical implementation casts the contents of
/// the new item again, at `options.path_key`, through `options.database` so
/// that wrappers around it observe every nested construction.
pub trait Database: Debug + Send + Sync {
    /// Materialize `data` as an entity or array, according to `options.class`.
    fn item(
        &self,
        model: Option<&Arc<Model>>,
        data: Value,
        options: ItemOptions<'_>,
    ) -> Result<Item>;
}

/// Per-call options handed to [`Database::item`].
#[derive(Debug, Clone, Copy)]
pub struct ItemOptions<'a> {
    /// Field path of the value; `None` for a root entity.
    pub path_key: Option<&'a str>,

    /// Shape requested by the caster.
    pub class: ItemClass,

    /// Schema the value was cast against.
    pub schema: &'a Schema,

    /// Database the caster was given. Nested items should be built through it.
    pub database: &'a dyn Database,
}
