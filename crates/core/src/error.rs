use thiserror::Error;

/// Errors raised while loading schema documents or configuration.
///
/// Mapping itself never fails; only the fallible surfaces around it report
/// errors. `location` is the dotted key path of the offending node, empty
/// for the document itself.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Schema document must be an object, found {found}")]
    NotARecord { found: &'static str },

    #[error("Unsupported schema value at '{location}': {found}")]
    Unsupported {
        location: String,
        found: &'static str,
    },

    #[error("Sequence schema at '{location}' must hold exactly one item schema, found {len}")]
    SequenceArity { location: String, len: usize },

    #[error("Transform reference at '{location}' must be a string")]
    InvalidTransformRef { location: String },

    #[error("Unknown transform '{name}' at '{location}'")]
    UnknownTransform { location: String, name: String },
}
