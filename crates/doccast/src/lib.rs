pub mod db;
pub use db::Db;

pub use doccast_core::{
    bail, doc, driver, err, schema,
    schema::{CastOptions, Field, Model},
    value,
    value::ItemClass,
    Database, Document, Error, Item, Result, Schema, Value,
};
