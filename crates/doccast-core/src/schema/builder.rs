use super::{types, Config, Field, Handler, Schema};
use crate::{Error, Result, Value};
use indexmap::IndexMap;

/// Collects field declarations, aliases and handlers for a [`Schema`].
#[derive(Debug, Clone)]
pub struct Builder {
    fields: IndexMap<String, Field>,

    /// Extra aliases, applied over the built-in ones
    aliases: IndexMap<String, String>,

    /// User handlers, applied over the built-in ones
    handlers: IndexMap<String, Handler>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            aliases: IndexMap::new(),
            handlers: IndexMap::new(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        let mut builder = Self::new();
        builder.fields(
            config
                .fields
                .into_iter()
                .map(|(name, field)| (name, Field::from(field))),
        );

        for (native, canonical) in config.aliases {
            builder.alias(native, canonical);
        }

        builder
    }

    /// Declares a field, replacing an earlier declaration of the same name.
    pub fn field(&mut self, name: impl Into<String>, field: Field) -> &mut Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn fields<N: Into<String>>(
        &mut self,
        fields: impl IntoIterator<Item = (N, Field)>,
    ) -> &mut Self {
        for (name, field) in fields {
            self.field(name, field);
        }
        self
    }

    /// Registers a handler for a logical type. Registering under a built-in
    /// name (`"date"`, `"id"`, ...) replaces the built-in.
    pub fn handler(
        &mut self,
        ty: impl Into<String>,
        f: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> &mut Self {
        self.handlers.insert(ty.into(), Handler::custom(f));
        self
    }

    /// Makes `native` resolve to the logical type `canonical`.
    pub fn alias(&mut self, native: impl Into<String>, canonical: impl Into<String>) -> &mut Self {
        self.aliases.insert(native.into(), canonical.into());
        self
    }

    pub fn build(&self) -> Result<Schema> {
        for name in self.fields.keys() {
            verify_field_name(name)?;
        }

        for (native, canonical) in &self.aliases {
            if canonical.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "alias `{native}` has an empty target type"
                )));
            }
        }

        let (id_name, id_ty) = types::ID_FIELD;
        let mut fields = IndexMap::with_capacity(self.fields.len() + 1);
        if !self.fields.contains_key(id_name) {
            fields.insert(id_name.to_string(), Field::new(id_ty));
        }
        fields.extend(self.fields.clone());

        let aliases = types::ALIASES
            .iter()
            .map(|(native, canonical)| (native.to_string(), canonical.to_string()))
            .chain(self.aliases.clone())
            .collect();

        let handlers = Handler::builtins()
            .map(|(ty, handler)| (ty.to_string(), handler))
            .chain(self.handlers.clone())
            .collect();

        Ok(Schema {
            fields,
            aliases,
            handlers,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

fn verify_field_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_schema("field name is empty"));
    }

    if name.split('.').any(str::is_empty) {
        return Err(Error::invalid_schema(format!(
            "empty path segment in field `{name}`"
        )));
    }

    Ok(())
}
