use doccast::{
    driver::ItemOptions, CastOptions, Database, Db, Item, ItemClass, Model, Result, Value,
};
use std::sync::{Arc, Mutex};

/// A [`Database`] wrapper that logs every item built through it.
///
/// `Db` builds nested items through `ItemOptions::database`, so once a cast
/// starts on the wrapper, every nested construction is logged too.
#[derive(Debug)]
pub struct LoggingDatabase {
    inner: Db,

    /// Log of all items built through this database
    ops_log: Arc<Mutex<Vec<ItemOp>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemOp {
    pub model: Option<String>,
    pub path_key: Option<String>,
    pub class: ItemClass,
}

impl LoggingDatabase {
    pub fn new(inner: Db) -> Self {
        Self {
            inner,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the log so far
    pub fn ops(&self) -> Vec<ItemOp> {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .clone()
    }

    pub fn db(&self) -> &Db {
        &self.inner
    }

    /// Same as [`Db::cast`], with nested items built through the wrapper.
    pub fn cast(&self, model: &str, data: impl Into<Value>) -> Result<Value> {
        let model = self.inner.model(model)?;
        let options = CastOptions::new().model(model).database(self);
        model.schema().cast(None, data.into(), options)
    }
}

impl Database for LoggingDatabase {
    fn item(
        &self,
        model: Option<&Arc<Model>>,
        data: Value,
        options: ItemOptions<'_>,
    ) -> Result<Item> {
        let op = ItemOp {
            model: model.map(|model| model.name().to_string()),
            path_key: options.path_key.map(str::to_string),
            class: options.class,
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(op);

        self.inner.item(model, data, options)
    }
}
