//! Schema-driven mapping of JSON values.
//!
//! A [`RecordSchema`] describes the output shape declaratively; the engine
//! walks it, pulling each field from the input by pass-through copy, path
//! lookup, computation or recursion into nested records and sequences.
//!
//! ## Key Abstractions
//!
//! - **`Schema`**: How a single field is produced
//! - **`SchemaSource`**: A fixed record schema, or one chosen per input value
//! - **`Mapper`**: A schema bound for reuse; see also [`map`] and [`mapper`]
//! - **`TransformRegistry`**: Named transforms for schema documents
//! - **`SchemaCompiler`**: Turns JSON schema documents into typed schemas

pub mod compiler;
pub mod config;
pub mod engine;
pub mod error;
pub mod mapper;
pub mod registry;
pub mod schema;
pub mod scope;

pub use compiler::SchemaCompiler;
pub use config::MapperConfig;
pub use engine::map_object;
pub use error::SchemaError;
pub use mapper::{Mapper, map, mapper};
pub use registry::TransformRegistry;
pub use schema::{RecordSchema, Schema, SchemaSelector, SchemaSource, Transform, TransformFn};
pub use scope::Scope;
