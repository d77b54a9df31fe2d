use crate::error::SchemaError;
use reshape_path::PathSyntax;
use serde::{Deserialize, Serialize};

/// Settings for reading schema documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapperConfig {
    /// Syntax of path strings in schema documents.
    pub path_syntax: PathSyntax,
    /// The sole key of an object that names a registered transform,
    /// e.g. `{"$transform": "upper"}`.
    pub transform_key: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            path_syntax: PathSyntax::default(),
            transform_key: "$transform".to_string(),
        }
    }
}

impl MapperConfig {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }
}
