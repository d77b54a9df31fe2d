//! The recursive field resolver and record mapper.
//!
//! Mapping is a best-effort projection: shape mismatches never raise, they
//! only cause the affected field to be omitted from the output.
use crate::schema::{RecordSchema, Schema};
use crate::scope::Scope;
use log::trace;
use reshape_path::{PathSegment, lookup};
use serde_json::{Map, Value};

/// Maps `input` through `schema` with `input` as the document root.
///
/// Always yields a record. Fields whose schema resolves to nothing are left
/// out rather than set to `null`.
pub fn map_object(input: &Value, schema: &RecordSchema) -> Map<String, Value> {
    map_fields(Some(input), schema, &Scope::new(input))
}

/// Builds a record from the schema's keys, resolving each against the
/// matching field of `input`.
pub(crate) fn map_fields(
    input: Option<&Value>,
    schema: &RecordSchema,
    scope: &Scope<'_>,
) -> Map<String, Value> {
    let mut output = Map::new();
    for (key, field_schema) in schema.iter() {
        let value = input.and_then(|record| lookup(record, key));
        let field_scope = scope.descend(key);
        match map_property(value, field_schema, input, &field_scope) {
            Some(mapped) => {
                output.insert(key.to_string(), mapped);
            }
            None => trace!("Omitting field '{}': no value produced", render_path(&field_scope.path)),
        }
    }
    output
}

/// Resolves one field. `scope.path` already ends with the field's own key
/// or index.
pub(crate) fn map_property(
    value: Option<&Value>,
    schema: &Schema,
    parent: Option<&Value>,
    scope: &Scope<'_>,
) -> Option<Value> {
    match schema {
        Schema::PassThrough => value.cloned(),
        Schema::PathLookup(path) => path.resolve(scope.root, parent).cloned(),
        Schema::Transform(transform) => transform.call(value, parent, scope.root, &scope.path),
        Schema::ForEach(item_schema) => match value {
            Some(Value::Array(items)) => {
                let mapped = items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| {
                        map_property(Some(item), item_schema, value, &scope.descend(i))
                    })
                    .filter(|mapped| !is_empty_record(item_schema, mapped))
                    .collect();
                Some(Value::Array(mapped))
            }
            _ => {
                trace!(
                    "Sequence schema at '{}' applied to a non-sequence value",
                    render_path(&scope.path)
                );
                None
            }
        },
        Schema::Nested(fields) => Some(Value::Object(map_fields(value, fields, scope))),
    }
}

/// A nested item schema that produced no fields adds nothing to a sequence.
fn is_empty_record(item_schema: &Schema, mapped: &Value) -> bool {
    matches!(item_schema, Schema::Nested(_))
        && mapped.as_object().is_some_and(|record| record.is_empty())
}

fn render_path(path: &[PathSegment]) -> String {
    use itertools::Itertools;
    path.iter().join(".")
}
