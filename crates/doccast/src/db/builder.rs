use super::Db;
use doccast_core::{schema::Model, Error, Result, Schema};
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<(String, Arc<Schema>)>,
}

impl Builder {
    /// Registers a model under `name`.
    pub fn model(&mut self, name: impl Into<String>, schema: impl Into<Arc<Schema>>) -> &mut Self {
        self.models.push((name.into(), schema.into()));
        self
    }

    pub fn build(&self) -> Result<Db> {
        let mut models = IndexMap::with_capacity(self.models.len());

        for (name, schema) in &self.models {
            let model = Arc::new(Model::new(name.clone(), schema.clone()));
            if models.insert(name.clone(), model).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{name}` is registered more than once"
                )));
            }
        }

        Ok(Db { models })
    }
}
