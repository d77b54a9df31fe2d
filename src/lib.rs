//! Declarative reshaping of JSON documents.
//!
//! ```
//! use reshape::{RecordSchema, Schema, map};
//! use serde_json::json;
//!
//! let user = json!({
//!     "id": 1,
//!     "company": { "name": "Moka" },
//!     "email": "jack@moka.com"
//! });
//! let schema = RecordSchema::new()
//!     .field("id", Schema::PassThrough)
//!     .field("companyName", "company.name")
//!     .field("contacts", RecordSchema::new().field("email", "$.email"));
//!
//! assert_eq!(
//!     map(&user, schema),
//!     json!({ "id": 1, "companyName": "Moka", "contacts": { "email": "jack@moka.com" } })
//! );
//! ```

pub use reshape_core::{
    Mapper, MapperConfig, RecordSchema, Schema, SchemaCompiler, SchemaError, SchemaSelector,
    SchemaSource, Scope, Transform, TransformFn, TransformRegistry, map, map_object, mapper,
};
pub use reshape_path::{Anchor, PathExpr, PathSegment, PathSyntax, lookup, parse_path, parse_path_with};

/// Compiles a JSON schema document with the built-in transforms and default
/// configuration, and binds it into a [`Mapper`].
pub fn mapper_from_document(document: &str) -> Result<Mapper, SchemaError> {
    let registry = TransformRegistry::default();
    let schema = SchemaCompiler::new(&registry).compile_str(document)?;
    log::debug!("Bound schema document with {} fields", schema.len());
    Ok(Mapper::new(schema))
}
