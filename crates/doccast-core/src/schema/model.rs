use super::Schema;
use std::sync::Arc;

/// A named owner of a [`Schema`], usually one per collection.
#[derive(Debug)]
pub struct Model {
    name: String,
    schema: Arc<Schema>,
}

impl Model {
    pub fn new(name: impl Into<String>, schema: impl Into<Arc<Schema>>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
