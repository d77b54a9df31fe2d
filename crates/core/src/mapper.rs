//! Top-level entry points.
use crate::engine::map_fields;
use crate::schema::SchemaSource;
use crate::scope::Scope;
use log::debug;
use serde_json::Value;

/// A schema bound for reuse across many inputs.
#[derive(Debug, Clone)]
pub struct Mapper {
    source: SchemaSource,
}

impl Mapper {
    pub fn new(schema: impl Into<SchemaSource>) -> Self {
        Self {
            source: schema.into(),
        }
    }

    pub fn source(&self) -> &SchemaSource {
        &self.source
    }

    /// Maps `data`.
    ///
    /// A sequence is mapped element by element, each element acting as its
    /// own document root and picking its own schema when the source is
    /// dynamic. Any other value is mapped once into a record.
    pub fn map(&self, data: &Value) -> Value {
        match data {
            Value::Array(items) => {
                debug!("Mapping a sequence of {} items", items.len());
                Value::Array(items.iter().map(|item| self.map_one(item)).collect())
            }
            _ => self.map_one(data),
        }
    }

    fn map_one(&self, value: &Value) -> Value {
        let schema = self.source.resolve(value);
        Value::Object(map_fields(Some(value), &schema, &Scope::new(value)))
    }
}

/// Maps `data` through `schema` immediately.
pub fn map(data: &Value, schema: impl Into<SchemaSource>) -> Value {
    Mapper::new(schema).map(data)
}

/// Pre-binds `schema`, returning a function that maps any input through it.
pub fn mapper(schema: impl Into<SchemaSource>) -> impl Fn(&Value) -> Value + Send + Sync {
    let bound = Mapper::new(schema);
    move |data: &Value| bound.map(data)
}
