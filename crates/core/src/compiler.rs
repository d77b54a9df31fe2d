//! Compiles JSON schema documents into [`RecordSchema`]s.
//!
//! The document form mirrors the typed schema: `true` copies a field, a
//! string is a path, a one-element array maps a sequence, an object with
//! only the transform key names a registered transform, and any other
//! object is a nested record.
use crate::config::MapperConfig;
use crate::error::SchemaError;
use crate::registry::TransformRegistry;
use crate::schema::{RecordSchema, Schema};
use itertools::Itertools;
use log::debug;
use reshape_path::parse_path_with;
use serde_json::{Map, Value};

/// Turns schema documents into typed schemas, resolving transform names
/// against a registry.
pub struct SchemaCompiler<'r> {
    registry: &'r TransformRegistry,
    config: MapperConfig,
}

impl<'r> SchemaCompiler<'r> {
    pub fn new(registry: &'r TransformRegistry) -> Self {
        Self::with_config(registry, MapperConfig::default())
    }

    pub fn with_config(registry: &'r TransformRegistry, config: MapperConfig) -> Self {
        Self { registry, config }
    }

    /// Parses and compiles a schema document.
    pub fn compile_str(&self, source: &str) -> Result<RecordSchema, SchemaError> {
        let document: Value = serde_json::from_str(source)?;
        self.compile(&document)
    }

    /// Compiles a top-level schema document, which must be an object.
    pub fn compile(&self, document: &Value) -> Result<RecordSchema, SchemaError> {
        match document {
            Value::Object(fields) => {
                let schema = self.compile_record(fields, &mut Vec::new())?;
                debug!("Compiled schema document with {} top-level fields", schema.len());
                Ok(schema)
            }
            other => Err(SchemaError::NotARecord {
                found: kind_of(other),
            }),
        }
    }

    fn compile_record(
        &self,
        fields: &Map<String, Value>,
        location: &mut Vec<String>,
    ) -> Result<RecordSchema, SchemaError> {
        let mut schema = RecordSchema::new();
        for (key, node) in fields {
            location.push(key.clone());
            let field = self.compile_node(node, location)?;
            location.pop();
            schema.insert(key.clone(), field);
        }
        Ok(schema)
    }

    fn compile_node(&self, node: &Value, location: &mut Vec<String>) -> Result<Schema, SchemaError> {
        match node {
            Value::Bool(true) => Ok(Schema::PassThrough),
            Value::String(path) => Ok(Schema::PathLookup(parse_path_with(
                path,
                &self.config.path_syntax,
            ))),
            Value::Array(items) => match items.as_slice() {
                [item] => {
                    location.push("[]".to_string());
                    let item_schema = self.compile_node(item, location)?;
                    location.pop();
                    Ok(Schema::ForEach(Box::new(item_schema)))
                }
                _ => Err(SchemaError::SequenceArity {
                    location: render(location),
                    len: items.len(),
                }),
            },
            Value::Object(fields) => match self.transform_ref(fields) {
                Some(Value::String(name)) => self
                    .registry
                    .get(name)
                    .cloned()
                    .map(Schema::Transform)
                    .ok_or_else(|| SchemaError::UnknownTransform {
                        location: render(location),
                        name: name.clone(),
                    }),
                Some(_) => Err(SchemaError::InvalidTransformRef {
                    location: render(location),
                }),
                None => Ok(Schema::Nested(self.compile_record(fields, location)?)),
            },
            other => Err(SchemaError::Unsupported {
                location: render(location),
                found: kind_of(other),
            }),
        }
    }

    /// The transform reference of an object holding only the transform key.
    fn transform_ref<'v>(&self, fields: &'v Map<String, Value>) -> Option<&'v Value> {
        if fields.len() == 1 {
            fields.get(&self.config.transform_key)
        } else {
            None
        }
    }
}

fn render(location: &[String]) -> String {
    location.iter().join(".")
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(true) => "true",
        Value::Bool(false) => "false",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
