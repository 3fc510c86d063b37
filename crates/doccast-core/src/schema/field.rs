use crate::Value;

/// A declared field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    /// Declared type name. May be a logical type (`"date"`) or an alias
    /// (`"timestamp"`).
    pub ty: Option<String>,

    /// The field holds a list of `ty` values
    pub array: bool,

    /// Value used when the field is absent
    pub default: Option<Value>,

    pub nullable: bool,
}

impl Field {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// A field declared without a type. Its values are never coerced.
    pub fn untyped() -> Self {
        Self::default()
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn is_array(&self) -> bool {
        self.array || self.ty.as_deref() == Some("array")
    }
}
