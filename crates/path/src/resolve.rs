//! Resolution of path expressions against JSON values.
use super::ast::{Anchor, PathExpr};
use serde_json::Value;

/// Looks up one field name in `value`.
///
/// Records are indexed by key, sequences by the name parsed as an index.
/// Every other value, `null` included, has no fields.
pub fn lookup<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(name),
        Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

impl PathExpr {
    /// Resolves the expression, starting at `root` when it is rooted and at
    /// `local` otherwise. A missing step anywhere yields `None`.
    pub fn resolve<'a>(&self, root: &'a Value, local: Option<&'a Value>) -> Option<&'a Value> {
        let start = match self.anchor {
            Anchor::Root => Some(root),
            Anchor::Local => local,
        };
        self.segments
            .iter()
            .try_fold(start?, |current, name| lookup(current, name))
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_path;
    use serde_json::json;

    #[test]
    fn test_resolve_local_and_root() {
        let root = json!({ "a": 1, "nested": { "b": 2 } });
        let local = &root["nested"];

        assert_eq!(parse_path("b").resolve(&root, Some(local)), Some(&json!(2)));
        assert_eq!(parse_path("$.a").resolve(&root, Some(local)), Some(&json!(1)));
        assert_eq!(parse_path("a").resolve(&root, Some(local)), None);
    }

    #[test]
    fn test_missing_intermediate_is_absent() {
        let root = json!({ "company": null, "name": "Jack" });
        assert_eq!(parse_path("company.name").resolve(&root, Some(&root)), None);
        assert_eq!(parse_path("name.length").resolve(&root, Some(&root)), None);
        assert_eq!(parse_path("missing.deeper.still").resolve(&root, Some(&root)), None);
    }

    #[test]
    fn test_null_leaf_is_a_value() {
        let root = json!({ "company": null });
        assert_eq!(
            parse_path("company").resolve(&root, Some(&root)),
            Some(&json!(null))
        );
    }

    #[test]
    fn test_sequence_index_segment() {
        let root = json!({ "friends": [{ "id": 2 }, { "id": 3 }] });
        assert_eq!(
            parse_path("friends.1.id").resolve(&root, Some(&root)),
            Some(&json!(3))
        );
        assert_eq!(parse_path("friends.2.id").resolve(&root, Some(&root)), None);
        assert_eq!(parse_path("friends.first").resolve(&root, Some(&root)), None);
    }

    #[test]
    fn test_absent_local_parent() {
        let root = json!({ "a": 1 });
        assert_eq!(parse_path("a").resolve(&root, None), None);
        assert_eq!(parse_path("$.a").resolve(&root, None), Some(&json!(1)));
    }
}
