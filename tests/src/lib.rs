mod logging_database;
pub use logging_database::{ItemOp, LoggingDatabase};

pub use doccast::{
    doc, CastOptions, Db, Document, Error, Field, Item, ItemClass, Result, Schema, Value,
};

pub const OID: &str = "507f1f77bcf86cd799439011";
pub const OID2: &str = "65a1b2c3d4e5f60718293a4b";

/// Installs `env_logger` once per test binary. Set `RUST_LOG=trace` to see
/// every item the caster builds.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Schema of a blog post with an embedded author and a list of comments.
pub fn posts_schema() -> Schema {
    Schema::builder()
        .field("title", Field::new("string"))
        .field("created", Field::new("timestamp"))
        .field("views", Field::new("int"))
        .field("published", Field::new("boolean"))
        .field("matcher", Field::new("regex"))
        .field("tags", Field::new("string").array())
        .field("related", Field::new("id").array())
        .field("author.id", Field::new("id"))
        .field("author.joined", Field::new("date"))
        .field("comments", Field::new("object").array())
        .field("comments.author_id", Field::new("ObjectId"))
        .field("comments.created", Field::new("date"))
        .field("comments.votes", Field::new("integer"))
        .build()
        .unwrap()
}

/// A [`LoggingDatabase`] over a `Db` with a single `Posts` model.
pub fn blog() -> LoggingDatabase {
    init_logging();

    let db = Db::builder()
        .model("Posts", posts_schema())
        .build()
        .unwrap();

    LoggingDatabase::new(db)
}

/// Expected log entry for a `Posts` item.
pub fn post_op(class: ItemClass, path_key: &str) -> ItemOp {
    ItemOp {
        model: Some("Posts".to_string()),
        path_key: Some(path_key.to_string()),
        class,
    }
}

pub fn oid(src: &str) -> Value {
    Value::from(bson::oid::ObjectId::parse_str(src).unwrap())
}
