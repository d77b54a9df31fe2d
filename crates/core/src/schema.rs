//! Declarative descriptions of output shapes.
use indexmap::IndexMap;
use reshape_path::{PathExpr, PathSegment};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// The signature of a computed field.
///
/// Arguments are the field's current input value, the input record that
/// encloses it, the document root, and the key path leading to the field.
/// Returning `None` omits the field.
pub type TransformFn =
    dyn Fn(Option<&Value>, Option<&Value>, &Value, &[PathSegment]) -> Option<Value> + Send + Sync;

/// A shareable computed-field function, optionally named for diagnostics.
#[derive(Clone)]
pub struct Transform {
    name: Option<Arc<str>>,
    func: Arc<TransformFn>,
}

impl Transform {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>, &Value, &[PathSegment]) -> Option<Value>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Creates a transform that reports `name` in debug output.
    pub fn named<F>(name: &str, func: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>, &Value, &[PathSegment]) -> Option<Value>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(
        &self,
        value: Option<&Value>,
        parent: Option<&Value>,
        root: &Value,
        path: &[PathSegment],
    ) -> Option<Value> {
        (self.func)(value, parent, root, path)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Transform({})", name),
            None => f.write_str("Transform(<fn>)"),
        }
    }
}

/// How a single output field is produced.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Copy the field's current value verbatim.
    PassThrough,
    /// Fetch a value from the local record or the document root.
    PathLookup(PathExpr),
    /// Compute the value with a function of the field's context.
    Transform(Transform),
    /// The field holds a sequence; map every element through the inner schema.
    ForEach(Box<Schema>),
    /// Produce a nested record.
    Nested(RecordSchema),
}

impl Schema {
    pub fn path(expr: impl Into<PathExpr>) -> Self {
        Schema::PathLookup(expr.into())
    }

    pub fn transform<F>(func: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>, &Value, &[PathSegment]) -> Option<Value>
            + Send
            + Sync
            + 'static,
    {
        Schema::Transform(Transform::new(func))
    }

    pub fn each(item: impl Into<Schema>) -> Self {
        Schema::ForEach(Box::new(item.into()))
    }

    pub fn nested(fields: RecordSchema) -> Self {
        Schema::Nested(fields)
    }
}

impl From<&str> for Schema {
    fn from(path: &str) -> Self {
        Schema::PathLookup(path.into())
    }
}

impl From<String> for Schema {
    fn from(path: String) -> Self {
        Schema::PathLookup(path.into())
    }
}

impl From<PathExpr> for Schema {
    fn from(path: PathExpr) -> Self {
        Schema::PathLookup(path)
    }
}

impl From<Transform> for Schema {
    fn from(transform: Transform) -> Self {
        Schema::Transform(transform)
    }
}

impl From<RecordSchema> for Schema {
    fn from(fields: RecordSchema) -> Self {
        Schema::Nested(fields)
    }
}

/// An ordered mapping of output keys to field schemas.
///
/// Keys drive iteration: the output record has at most these keys, in this
/// order. Inserting an existing key replaces its schema in place.
#[derive(Debug, Clone, Default)]
pub struct RecordSchema {
    fields: IndexMap<String, Schema>,
}

impl RecordSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    pub fn field(mut self, key: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.insert(key, schema);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, schema: impl Into<Schema>) -> Option<Schema> {
        self.fields.insert(key.into(), schema.into())
    }

    pub fn get(&self, key: &str) -> Option<&Schema> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, S> FromIterator<(K, S)> for RecordSchema
where
    K: Into<String>,
    S: Into<Schema>,
{
    fn from_iter<T: IntoIterator<Item = (K, S)>>(iter: T) -> Self {
        let mut schema = RecordSchema::new();
        for (key, field) in iter {
            schema.insert(key, field);
        }
        schema
    }
}

/// The function type that picks a record schema for a whole input value.
pub type SchemaSelector = dyn Fn(&Value) -> RecordSchema + Send + Sync;

/// The schema applied at the top level of a mapping.
#[derive(Clone)]
pub enum SchemaSource {
    /// The same record schema for every input.
    Fixed(RecordSchema),
    /// A schema produced from each input value (or each element of a
    /// top-level sequence) before mapping it.
    Dynamic(Arc<SchemaSelector>),
}

impl SchemaSource {
    pub fn dynamic<F>(select: F) -> Self
    where
        F: Fn(&Value) -> RecordSchema + Send + Sync + 'static,
    {
        SchemaSource::Dynamic(Arc::new(select))
    }

    /// Produces the concrete record schema for `value`.
    pub fn resolve(&self, value: &Value) -> Cow<'_, RecordSchema> {
        match self {
            SchemaSource::Fixed(schema) => Cow::Borrowed(schema),
            SchemaSource::Dynamic(select) => Cow::Owned(select(value)),
        }
    }
}

impl fmt::Debug for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::Fixed(schema) => f.debug_tuple("Fixed").field(schema).finish(),
            SchemaSource::Dynamic(_) => f.write_str("Dynamic(<fn>)"),
        }
    }
}

impl From<RecordSchema> for SchemaSource {
    fn from(schema: RecordSchema) -> Self {
        SchemaSource::Fixed(schema)
    }
}

impl From<&RecordSchema> for SchemaSource {
    fn from(schema: &RecordSchema) -> Self {
        SchemaSource::Fixed(schema.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_keeps_insertion_order() {
        let schema = RecordSchema::new()
            .field("id", Schema::PassThrough)
            .field("name", "firstName")
            .field("age", "age");
        let keys: Vec<&str> = schema.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["id", "name", "age"]);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut schema = RecordSchema::new().field("a", "x").field("b", "y");
        let previous = schema.insert("a", Schema::PassThrough);
        assert!(matches!(previous, Some(Schema::PathLookup(_))));
        assert!(matches!(schema.get("a"), Some(Schema::PassThrough)));
        assert_eq!(schema.iter().next().map(|(k, _)| k), Some("a"));
    }

    #[test]
    fn test_string_converts_to_path_lookup() {
        match Schema::from("$.company.name") {
            Schema::PathLookup(path) => {
                assert!(path.is_rooted());
                assert_eq!(path.segments(), ["company", "name"]);
            }
            other => panic!("expected a path lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_transform_debug_shows_name() {
        let named = Transform::named("upper", |v, _, _, _| v.cloned());
        assert_eq!(format!("{:?}", named), "Transform(upper)");
        let anonymous = Transform::new(|_, _, _, _| None);
        assert_eq!(format!("{:?}", anonymous), "Transform(<fn>)");
    }

    #[test]
    fn test_dynamic_source_selects_per_value() {
        let source = SchemaSource::dynamic(|value| {
            if value.get("kind") == Some(&json!("person")) {
                RecordSchema::new().field("name", "name")
            } else {
                RecordSchema::new().field("title", "title")
            }
        });
        let person = source.resolve(&json!({ "kind": "person" }));
        assert!(person.get("name").is_some());
        let book = source.resolve(&json!({ "kind": "book" }));
        assert!(book.get("title").is_some());
    }

    #[test]
    fn test_schema_types_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
        assert_send_sync::<RecordSchema>();
        assert_send_sync::<SchemaSource>();
    }
}
