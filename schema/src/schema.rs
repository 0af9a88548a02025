//! Schema definitions and validation.

use std::collections::HashSet;

use crate::error::{SchemaError, SchemaResult};
use crate::{QueryObject, Value, ValueKind};

/// A field definition within a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub key: String,
    pub kind: ValueKind,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub fn new(key: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

/// Per-key decoding hints for query strings.
///
/// A schema is usually derived once from a default state object: each key's
/// current value kind decides how later query text for that key is coerced.
/// Keys the schema does not know are decoded as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Creates a schema from fields after validation.
    pub fn new(fields: Vec<FieldDef>) -> SchemaResult<Self> {
        let schema = Self { fields };
        schema.validate()?;
        Ok(schema)
    }

    /// Creates a schema with no fields; every key decodes raw.
    #[must_use]
    pub const fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates a schema builder.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Derives a schema from the kinds of an object's values.
    #[must_use]
    pub fn from_object(object: &QueryObject) -> Self {
        Self {
            fields: object
                .iter()
                .map(|(key, value)| FieldDef::new(key, value.kind()))
                .collect(),
        }
    }

    /// Validates schema invariants.
    pub fn validate(&self) -> SchemaResult<()> {
        let mut keys = HashSet::new();
        for field in &self.fields {
            if !keys.insert(field.key.as_str()) {
                return Err(SchemaError::DuplicateKey {
                    key: field.key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the declared kind for `key`.
    #[must_use]
    pub fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.kind)
    }

    /// Coerces decoded query text for `key`.
    #[must_use]
    pub fn coerce(&self, key: &str, raw: &str) -> Value {
        self.kind_of(key)
            .map_or_else(|| Value::String(raw.to_string()), |kind| kind.coerce(raw))
    }
}

/// Builder for `Schema`.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    /// Adds a field definition.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, kind: ValueKind) -> Self {
        self.fields.push(FieldDef::new(key, kind));
        self
    }

    /// Builds the schema after validation.
    pub fn build(self) -> SchemaResult<Schema> {
        Schema::new(self.fields)
    }
}
