use serde::{Deserialize, Serialize};

/// The surface syntax of path expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathSyntax {
    /// Prefix that anchors a path at the document root. An empty marker
    /// disables root anchoring.
    pub root_marker: String,
    /// Character splitting a path into field names.
    pub separator: char,
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self {
            root_marker: "$.".to_string(),
            separator: '.',
        }
    }
}
