#[macro_use]
mod macros;

pub mod driver;
pub use driver::Database;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

pub mod value;
pub use value::{Document, Item, Value};

/// A Result type alias that uses doccast's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
