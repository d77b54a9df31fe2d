//! Defines the registry and built-in implementations of named transforms.
use crate::schema::Transform;
use reshape_path::PathSegment;
use serde_json::{Value, json};
use std::collections::HashMap;

/// A registry of transforms that schema documents can reference by name.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    transforms: HashMap<String, Transform>,
}

impl TransformRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Registers a transform under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: &str, func: F)
    where
        F: Fn(Option<&Value>, Option<&Value>, &Value, &[PathSegment]) -> Option<Value>
            + Send
            + Sync
            + 'static,
    {
        self.transforms
            .insert(name.to_lowercase(), Transform::named(name, func));
    }

    /// Finds a transform by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.transforms.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

// --- Built-in Transform Implementations ---

fn upper(value: Option<&Value>, _: Option<&Value>, _: &Value, _: &[PathSegment]) -> Option<Value> {
    value?.as_str().map(|s| s.to_uppercase().into())
}

fn lower(value: Option<&Value>, _: Option<&Value>, _: &Value, _: &[PathSegment]) -> Option<Value> {
    value?.as_str().map(|s| s.to_lowercase().into())
}

fn trim(value: Option<&Value>, _: Option<&Value>, _: &Value, _: &[PathSegment]) -> Option<Value> {
    value?.as_str().map(|s| s.trim().into())
}

fn count(value: Option<&Value>, _: Option<&Value>, _: &Value, _: &[PathSegment]) -> Option<Value> {
    match value? {
        Value::Array(items) => Some(json!(items.len())),
        Value::Object(map) => Some(json!(map.len())),
        Value::String(s) => Some(json!(s.chars().count())),
        _ => None,
    }
}

fn to_string(value: Option<&Value>, _: Option<&Value>, _: &Value, _: &[PathSegment]) -> Option<Value> {
    match value? {
        Value::String(s) => Some(Value::String(s.clone())),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        Value::Null => Some(Value::String("null".to_string())),
        _ => None,
    }
}

fn exists(value: Option<&Value>, _: Option<&Value>, _: &Value, _: &[PathSegment]) -> Option<Value> {
    Some(json!(value.is_some_and(|v| !v.is_null())))
}

fn index(_: Option<&Value>, _: Option<&Value>, _: &Value, path: &[PathSegment]) -> Option<Value> {
    path.iter().rev().find_map(PathSegment::as_index).map(|i| json!(i))
}

impl Default for TransformRegistry {
    /// Creates a new registry populated with all built-in transforms.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("upper", upper);
        registry.register("lower", lower);
        registry.register("trim", trim);
        registry.register("count", count);
        registry.register("string", to_string);
        registry.register("exists", exists);
        registry.register("index", index);
        registry
    }
}
